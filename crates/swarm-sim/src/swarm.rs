//! `SwarmSim`: the kinematic tick driver for the flocking and
//! social-influence scenarios.

use swarm_agent::{AgentRngs, AgentStore, AgentStoreBuilder, RoleGroup};
use swarm_core::{AgentId, Role, SimClock, SimRng, Tick, Vec2, WorldConfig};
use swarm_steer::{SteerContext, SteerOutcome, SteeringTable, steer};
use tracing::info;

use crate::observer::snapshot_due;
use crate::{SimError, SimObserver, SimResult, SwarmSimBuilder};

/// Read-only copy of one agent's observable state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub role:      Role,
    pub position:  Vec2,
    pub velocity:  Vec2,
    pub heading:   f32,
    pub alignment: f32,
    pub pinned:    bool,
}

/// The kinematic simulation runner.
///
/// Each tick has two phases:
///
/// 1. **Steer** (optionally parallel with the `parallel` feature): every
///    agent's rules are evaluated against a [`SteerContext`] over the
///    prior-tick store.  Nothing is written.
/// 2. **Apply** (sequential, ascending `AgentId`): forces are accumulated,
///    velocity is limited, positions integrated and wrapped.
///
/// Create via [`SwarmSimBuilder`] or the [`leader_follow`](Self::leader_follow)
/// and [`social_influence`](Self::social_influence) shortcuts.
pub struct SwarmSim {
    pub world: WorldConfig,

    pub clock: SimClock,

    /// Agent state (SoA arrays).  Steering reads it through `SteerContext`.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Per-role steering rules.
    pub table: SteeringTable,

    /// Ticks between `on_agents` snapshots; `0` disables them.
    pub snapshot_interval: u64,

    pub(crate) groups: Vec<RoleGroup>,

    /// Driver stream: placement and per-run agent seeds.  Never reseeded, so
    /// consecutive resets yield different populations.
    pub(crate) rng: SimRng,
}

impl SwarmSim {
    /// Two leaders wandering with forty followers in tow (by default).
    pub fn leader_follow(world: WorldConfig, cfg: &swarm_core::FlockConfig) -> SimResult<Self> {
        SwarmSimBuilder::leader_follow(world, cfg).build()
    }

    /// Influencers broadcasting their heading to a crowd of users.
    pub fn social_influence(world: WorldConfig, cfg: &swarm_core::InfluenceConfig) -> SimResult<Self> {
        SwarmSimBuilder::social_influence(world, cfg).build()
    }

    pub(crate) fn scatter(groups: &[RoleGroup], world: &WorldConfig, rng: &mut SimRng) -> (AgentStore, AgentRngs) {
        let agent_seed: u64 = rng.random();
        AgentStoreBuilder::new(agent_seed)
            .groups(groups)
            .build_scattered(rng, world.width, world.height)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick.  Returns the tick that was processed.
    pub fn tick(&mut self) -> Tick {
        let now = self.clock.current_tick;
        self.process_tick(now);
        self.clock.advance();
        now
    }

    /// Run exactly `n` ticks from the current position, calling observer
    /// hooks at every tick boundary.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick(now);
            observer.on_tick_end(now);
            if snapshot_due(now, self.snapshot_interval) {
                observer.on_agents(now, &self.agents);
            }
            self.clock.advance();
        }
        Ok(())
    }

    /// [`run_ticks`](Self::run_ticks) followed by `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.run_ticks(n, observer)?;
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Drag a leader or influencer to `position`.  It stays there, at rest
    /// and unaffected by steering, until [`unpin`](Self::unpin).
    pub fn pin(&mut self, agent: AgentId, position: Vec2) -> SimResult<()> {
        self.agents.check(agent)?;
        let role = self.agents.role[agent.index()];
        if !role.is_draggable() {
            return Err(SimError::NotDraggable { agent, role });
        }
        self.agents.pin(agent, position)?;
        Ok(())
    }

    /// Release a dragged agent.  Physics resumes from the pinned position.
    pub fn unpin(&mut self, agent: AgentId) -> SimResult<Option<Vec2>> {
        let released = self.agents.unpin(agent)?;
        if let Some(p) = released {
            let role = self.agents.role[agent.index()];
            info!(%agent, "{role} released at ({:.1}, {:.1})", p.x, p.y);
        }
        Ok(released)
    }

    /// Draggable agent under `point`, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<AgentId> {
        self.agents.hit_test(point)
    }

    /// Fresh random population with the same groups and steering; clock
    /// back to tick 0.
    pub fn reset(&mut self) {
        let (agents, rngs) = Self::scatter(&self.groups, &self.world, &mut self.rng);
        self.agents = agents;
        self.rngs = rngs;
        self.clock.rewind();
        info!(agents = self.agents.count, "swarm reset");
    }

    pub fn view(&self, agent: AgentId) -> SimResult<AgentView> {
        self.agents.check(agent)?;
        let i = agent.index();
        Ok(AgentView {
            role:      self.agents.role[i],
            position:  self.agents.position[i],
            velocity:  self.agents.velocity[i],
            heading:   self.agents.heading[i],
            alignment: self.agents.alignment[i],
            pinned:    self.agents.is_pinned(agent),
        })
    }

    /// Mean alignment score over all users; `None` without users.
    pub fn mean_alignment(&self) -> Option<f32> {
        let scores: Vec<f32> = self
            .agents
            .ids_with_role(Role::User)
            .map(|a| self.agents.alignment[a.index()])
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f32>() / scores.len() as f32)
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) {
        let outcomes = self.compute_steering(now);

        // Apply phase: ascending AgentId, so results are deterministic even
        // when the steer phase ran in parallel.
        let (w, h) = (self.world.width, self.world.height);
        for (i, outcome) in outcomes.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            if let Some(score) = outcome.alignment {
                self.agents.alignment[i] = score;
            }
            self.agents.apply_force(agent, outcome.force);
            self.agents.integrate(agent);
            if !self.agents.is_pinned(agent) {
                self.agents.wrap_edges(agent, w, h);
            }
        }
    }

    /// One [`SteerOutcome`] per agent, in id order.
    fn compute_steering(&mut self, now: Tick) -> Vec<SteerOutcome> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents = &self.agents;
        let table  = &self.table;
        let rngs   = &mut self.rngs;

        let verbose = now.is_every(self.clock.frames_per_second as u64);
        let ctx = SteerContext::new(now, agents).with_verbose(verbose);

        #[cfg(not(feature = "parallel"))]
        {
            rngs.inner
                .iter_mut()
                .enumerate()
                .map(|(i, rng)| steer(AgentId(i as u32), &ctx, table, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| steer(AgentId(i as u32), &ctx, table, rng))
                .collect()
        }
    }
}
