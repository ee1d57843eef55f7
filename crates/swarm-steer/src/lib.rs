//! `swarm-steer`: steering behaviors and per-role steering tables.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`behaviors`] | Pure force functions: separation, seek-nearest, heading influence, peer alignment, wander |
//! | [`context`]   | `SteerContext<'a>`: read-only tick snapshot shared by all agents |
//! | [`steering`]  | `Steering` variants, `SteeringTable`, `steer()`, `SteerOutcome`   |
//!
//! # Design notes
//!
//! The tick loop in `swarm-sim` works in two phases:
//!
//! 1. **Decision phase** (optionally parallel): for every agent call
//!    [`steer`] against a `SteerContext` built over the prior-tick
//!    `AgentStore`.  No mutation; each agent draws randomness from its own
//!    `AgentRng`.
//!
//! 2. **Apply phase** (sequential): feed each `SteerOutcome` to
//!    `apply_force` → `integrate` → `wrap_edges` and commit the alignment
//!    score.
//!
//! Because every behavior reads the snapshot and never the partially
//! updated store, agent A's decision can never see agent B's new position
//! from the same tick.

pub mod behaviors;
pub mod context;
pub mod steering;

#[cfg(test)]
mod tests;

pub use behaviors::Influence;
pub use context::SteerContext;
pub use steering::{SteerOutcome, Steering, SteeringTable, steer};
