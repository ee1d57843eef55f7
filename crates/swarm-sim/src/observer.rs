//! Simulation observer trait for progress reporting and data collection.

use swarm_agent::AgentStore;
use swarm_core::Tick;
use swarm_epidemic::{InfectionEvent, Population};

/// Callbacks invoked by [`SwarmSim::run_ticks`][crate::SwarmSim::run_ticks]
/// and [`RumorSim::run_ticks`][crate::RumorSim::run_ticks] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A kinematic run never calls the
/// person/infection hooks and a rumor run never calls [`on_agents`].
///
/// [`on_agents`]: SimObserver::on_agents
///
/// # Example: spread counter
///
/// ```rust,ignore
/// struct SpreadCounter(usize);
///
/// impl SimObserver for SpreadCounter {
///     fn on_infection(&mut self, _event: &InfectionEvent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after every state change was applied.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Kinematic snapshot, every `snapshot_interval` ticks.
    fn on_agents(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Rumor-population snapshot, every `snapshot_interval` ticks.
    fn on_people(&mut self, _tick: Tick, _people: &Population) {}

    /// Called once per committed infection, in commit order.
    fn on_infection(&mut self, _event: &InfectionEvent) {}

    /// Called once after the final tick of [`run`][crate::SwarmSim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// `true` when a snapshot is due at `tick`.  Tick 0 counts; interval 0
/// disables snapshots.
pub(crate) fn snapshot_due(tick: Tick, interval: u64) -> bool {
    interval > 0 && tick.0 % interval == 0
}
