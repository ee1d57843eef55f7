//! Spread decisions and the events they produce.

use swarm_core::{PersonId, Tick, Vec2};

/// One successful transmission, as recorded in the event log.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfectionEvent {
    pub source: PersonId,
    pub target: PersonId,
    /// Spreader position at the time of transmission.
    pub from:   Vec2,
    /// Target position at the time of transmission.
    pub to:     Vec2,
    pub tick:   Tick,
}

/// Outcome of one spreader/other contact, decided against the snapshot and
/// applied later by [`RumorEngine::commit`](crate::RumorEngine::commit).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpreadDecision {
    /// `source` passes the rumor to the ignorant `target`.
    Infect { source: PersonId, target: PersonId },
    /// Two spreaders met and `victim` (one of them) stops spreading.
    Stifle { source: PersonId, other: PersonId, victim: PersonId },
}

/// What a commit changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpreadReport {
    /// New infections, in commit order.
    pub infections: Vec<InfectionEvent>,
    /// Persons stifled by spreader/spreader encounters.
    pub stifled:    Vec<PersonId>,
}
