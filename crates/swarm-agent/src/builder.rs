//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use swarm_agent::{AgentStoreBuilder, RoleGroup};
//! use swarm_core::{Role, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let (store, rngs) = AgentStoreBuilder::new(/*agent_seed=*/ 7)
//!     .group(RoleGroup::new(Role::Leader, 2, 3.5, 18.0))
//!     .group(RoleGroup::new(Role::Follower, 40, 2.5, 10.0))
//!     .build_scattered(&mut rng, 700.0, 450.0);
//!
//! assert_eq!(store.count, 42);
//! assert_eq!(rngs.len(), 42);
//! assert_eq!(store.role_count(Role::Leader), 2);
//! ```

use swarm_core::{Role, SimRng, Vec2};

use crate::{AgentRngs, AgentStore};

/// A block of agents sharing a role and kinematic limits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoleGroup {
    pub role:      Role,
    pub count:     usize,
    pub max_speed: f32,
    pub size:      f32,
}

impl RoleGroup {
    pub fn new(role: Role, count: usize, max_speed: f32, size: f32) -> Self {
        Self { role, count, max_speed, size }
    }
}

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Groups are laid out in the order they are added, so ids are contiguous
/// per group: with leaders added first, leaders are `AgentId(0..n_leaders)`.
pub struct AgentStoreBuilder {
    agent_seed: u64,
    groups:     Vec<RoleGroup>,
}

impl AgentStoreBuilder {
    /// Create a builder whose per-agent RNGs are seeded from `agent_seed`.
    pub fn new(agent_seed: u64) -> Self {
        Self { agent_seed, groups: Vec::new() }
    }

    /// Append a block of agents.
    pub fn group(mut self, group: RoleGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Append several blocks at once.
    pub fn groups(mut self, groups: &[RoleGroup]) -> Self {
        self.groups.extend_from_slice(groups);
        self
    }

    /// Total agents that [`build`](Self::build) will create.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Place every agent uniformly inside `width × height` with a random
    /// unit-length initial velocity.
    ///
    /// Draw order per agent is `x`, `y`, heading, so a given `rng` state
    /// always yields the same population.
    pub fn build_scattered(self, rng: &mut SimRng, width: f32, height: f32) -> (AgentStore, AgentRngs) {
        self.build_with(|| {
            let position = rng.point_in(width, height);
            let velocity = rng.unit_vector();
            (position, velocity)
        })
    }

    /// Build with every agent at the origin and at rest.  Tests then write
    /// positions and velocities directly to the `pub` SoA fields.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        self.build_with(|| (Vec2::ZERO, Vec2::ZERO))
    }

    fn build_with(self, mut place: impl FnMut() -> (Vec2, Vec2)) -> (AgentStore, AgentRngs) {
        let total = self.total();
        let mut store = AgentStore::with_capacity(total);
        for group in &self.groups {
            for _ in 0..group.count {
                let (position, velocity) = place();
                store.push(group.role, position, velocity, group.max_speed, group.size);
            }
        }
        let rngs = AgentRngs::new(total, self.agent_seed);
        (store, rngs)
    }
}
