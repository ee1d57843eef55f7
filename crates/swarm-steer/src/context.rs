//! Read-only simulation state passed to every steering evaluation.

use swarm_agent::AgentStore;
use swarm_core::{AgentId, Role, Tick};

/// A read-only snapshot of the kinematic population for one tick.
///
/// Built once per tick by `swarm-sim` and shared immutably across all agent
/// evaluations.  The per-role member lists are computed up front so
/// behaviors that scan "all leaders" or "all other users" do not re-filter
/// the whole store for every agent.
pub struct SteerContext<'a> {
    /// Tick being decided.
    pub tick: Tick,

    /// Prior-tick state of every agent.
    pub agents: &'a AgentStore,

    /// Emit per-agent trace lines on this tick.
    pub verbose: bool,

    by_role: [Vec<AgentId>; Role::COUNT],
}

impl<'a> SteerContext<'a> {
    /// Build the context for a single tick.
    pub fn new(tick: Tick, agents: &'a AgentStore) -> Self {
        let mut by_role: [Vec<AgentId>; Role::COUNT] = Default::default();
        for agent in agents.agent_ids() {
            by_role[agents.role[agent.index()].index()].push(agent);
        }
        Self { tick, agents, verbose: false, by_role }
    }

    /// Turn on trace output for this tick.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Every agent with `role`, ascending id order.
    #[inline]
    pub fn members(&self, role: Role) -> &[AgentId] {
        &self.by_role[role.index()]
    }
}
