//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, InfectionEventRow, OutputResult, PersonSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of kinematic agent snapshots.
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of rumor-population snapshots.
    fn write_people(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()>;

    /// Append one infection event.
    fn write_infection(&mut self, row: &InfectionEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
