//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The decision phase of a tick needs `&mut AgentRngs` (each agent draws its
//! wander direction from its own stream) and `&AgentStore` (the prior-tick
//! snapshot every agent reads) at the same time.  Keeping the RNGs outside
//! the store lets both borrows coexist:
//!
//! ```ignore
//! let store: &AgentStore = &sim.agents;
//! let outcomes = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| steer_agent(AgentId(i as u32), &ctx, rng))
//!     .collect::<Vec<_>>();
//! ```

use swarm_core::{AgentId, AgentRng, Role, SwarmError, SwarmResult, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so the
/// decision phase can borrow both at once.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count).map(|i| AgentRng::new(global_seed, i)).collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all kinematic agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.
///
/// Invariants maintained by [`integrate`](AgentStore::integrate):
/// `|velocity| ≤ max_speed` and `acceleration == 0` after every update.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Role tag; fixed at creation.
    pub role: Vec<Role>,

    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,

    /// Force accumulator for the current tick.  Transient.
    pub acceleration: Vec<Vec2>,

    /// Angle of the last integrated velocity.  Left untouched while pinned,
    /// so a dragged influencer keeps broadcasting the heading it had.
    pub heading: Vec<f32>,

    /// Speed cap; fixed per role.
    pub max_speed: Vec<f32>,

    /// Visual diameter.  The drag-capture circle has radius `size / 2`.
    pub size: Vec<f32>,

    /// External position while dragged; `None` when physics drives the agent.
    pub pinned: Vec<Option<Vec2>>,

    /// Heading-alignment score in `[0, 1]`.  Only written for agents whose
    /// steering includes heading influence; stays 0 for everyone else.
    pub alignment: Vec<f32>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// All agents with `role`, ascending.
    pub fn ids_with_role(&self, role: Role) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |a| self.role[a.index()] == role)
    }

    /// Number of agents with `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.role.iter().filter(|&&r| r == role).count()
    }

    /// `Ok(())` if `agent` indexes this store.
    pub fn check(&self, agent: AgentId) -> SwarmResult<()> {
        if agent.index() < self.count {
            Ok(())
        } else {
            Err(SwarmError::AgentNotFound(agent))
        }
    }

    #[inline]
    pub fn is_pinned(&self, agent: AgentId) -> bool {
        self.pinned[agent.index()].is_some()
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            count:        0,
            role:         Vec::with_capacity(count),
            position:     Vec::with_capacity(count),
            velocity:     Vec::with_capacity(count),
            acceleration: Vec::with_capacity(count),
            heading:      Vec::with_capacity(count),
            max_speed:    Vec::with_capacity(count),
            size:         Vec::with_capacity(count),
            pinned:       Vec::with_capacity(count),
            alignment:    Vec::with_capacity(count),
        }
    }

    pub(crate) fn push(&mut self, role: Role, position: Vec2, velocity: Vec2, max_speed: f32, size: f32) {
        self.role.push(role);
        self.position.push(position);
        self.velocity.push(velocity);
        self.acceleration.push(Vec2::ZERO);
        self.heading.push(velocity.y.atan2(velocity.x));
        self.max_speed.push(max_speed);
        self.size.push(size);
        self.pinned.push(None);
        self.alignment.push(0.0);
        self.count += 1;
    }
}
