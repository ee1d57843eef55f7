//! Force accumulation, integration and edge policy.
//!
//! These are the only operations that move a kinematic agent.  All of them
//! are total; indices are assumed valid (callers go through
//! [`AgentStore::check`] at API boundaries).

use swarm_core::{AgentId, SteerVec, SwarmResult, Vec2};

use crate::AgentStore;

impl AgentStore {
    /// Accumulate `force` into the agent's acceleration.
    ///
    /// Unbounded: behaviors clamp their own output before calling this.
    #[inline]
    pub fn apply_force(&mut self, agent: AgentId, force: Vec2) {
        self.acceleration[agent.index()] += force;
    }

    /// Advance one agent by one step.
    ///
    /// Unpinned: `v += a`, `v` limited to `max_speed`, `p += v`, heading
    /// updated, `a = 0`.  Pinned: the position is set from the pin and both
    /// velocity and acceleration are zeroed; heading is left as it was.
    pub fn integrate(&mut self, agent: AgentId) {
        let i = agent.index();
        if let Some(target) = self.pinned[i] {
            self.position[i]     = target;
            self.velocity[i]     = Vec2::ZERO;
            self.acceleration[i] = Vec2::ZERO;
            return;
        }
        let velocity = (self.velocity[i] + self.acceleration[i]).limit(self.max_speed[i]);
        self.velocity[i]      = velocity;
        self.position[i]     += velocity;
        self.heading[i]       = velocity.heading();
        self.acceleration[i]  = Vec2::ZERO;
    }

    /// Toroidal wrap.  Each axis is checked once with strict comparisons, so
    /// a coordinate sitting exactly on `0` or the far edge is left alone.
    pub fn wrap_edges(&mut self, agent: AgentId, width: f32, height: f32) {
        let p = &mut self.position[agent.index()];
        if p.x > width {
            p.x = 0.0;
        } else if p.x < 0.0 {
            p.x = width;
        }
        if p.y > height {
            p.y = 0.0;
        } else if p.y < 0.0 {
            p.y = height;
        }
    }

    /// Pin `agent` at `position`: physics is bypassed until [`unpin`](Self::unpin).
    ///
    /// The position takes effect immediately so readers see it before the
    /// next tick.
    pub fn pin(&mut self, agent: AgentId, position: Vec2) -> SwarmResult<()> {
        self.check(agent)?;
        let i = agent.index();
        self.pinned[i]       = Some(position);
        self.position[i]     = position;
        self.velocity[i]     = Vec2::ZERO;
        self.acceleration[i] = Vec2::ZERO;
        Ok(())
    }

    /// Release a pin.  Returns the position the agent was released at, or
    /// `None` if it was not pinned.
    pub fn unpin(&mut self, agent: AgentId) -> SwarmResult<Option<Vec2>> {
        self.check(agent)?;
        let i = agent.index();
        Ok(self.pinned[i].take().map(|_| self.position[i]))
    }

    /// First draggable agent whose drag-capture circle (radius `size / 2`)
    /// strictly contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<AgentId> {
        self.agent_ids().find(|&a| {
            let i = a.index();
            self.role[i].is_draggable() && self.position[i].distance(point) < self.size[i] / 2.0
        })
    }
}
