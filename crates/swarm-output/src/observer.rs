//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use swarm_agent::AgentStore;
use swarm_core::Tick;
use swarm_epidemic::{InfectionEvent, Population};
use swarm_sim::SimObserver;

use crate::row::{AgentSnapshotRow, InfectionEventRow, PersonSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots and infection events to any
/// [`OutputWriter`] backend.
///
/// Snapshot frequency is the simulation's `snapshot_interval`; every
/// infection is written as it is committed.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    infections: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, infections: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Infection events written so far.
    pub fn infections_written(&self) -> u64 {
        self.infections
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_agents(&mut self, tick: Tick, agents: &AgentStore) {
        let rows = AgentSnapshotRow::collect(tick, agents);
        if !rows.is_empty() {
            let result = self.writer.write_agents(&rows);
            self.store_err(result);
        }
    }

    fn on_people(&mut self, tick: Tick, people: &Population) {
        let rows = PersonSnapshotRow::collect(tick, people);
        if !rows.is_empty() {
            let result = self.writer.write_people(&rows);
            self.store_err(result);
        }
    }

    fn on_infection(&mut self, event: &InfectionEvent) {
        let result = self.writer.write_infection(&InfectionEventRow::from(event));
        if result.is_ok() {
            self.infections += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
