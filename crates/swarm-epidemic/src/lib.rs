//! `swarm-epidemic`: rumor propagation over a diffusing population.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`state`]      | `RumorState`, `RumorCounts`                                     |
//! | [`population`] | `Population` (SoA person state), `PersonRngs`, `PopulationBuilder` |
//! | [`engine`]     | `RumorEngine`: diffusion, timers, spread decisions and commit  |
//! | [`event`]      | `InfectionEvent`, `SpreadDecision`, `SpreadReport`              |
//!
//! # Tick phases
//!
//! The driver in `swarm-sim` runs the engine phases in this order:
//!
//! 1. [`RumorEngine::diffuse`]: every unpinned person jitters and is
//!    clamped inside the world.
//! 2. [`RumorEngine::advance_timers`]: spreaders count down; expired ones
//!    become stiflers.
//! 3. [`RumorEngine::decide`]: every spreader tests every other person
//!    against the post-movement snapshot.  Read-only.
//! 4. [`RumorEngine::commit`]: decisions are applied in ascending spreader
//!    order and infection events recorded.
//!
//! Movement fully precedes contact checks, and no decision observes another
//! decision of the same tick.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Runs phase 3 on Rayon's thread pool.                |

pub mod engine;
pub mod event;
pub mod population;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::RumorEngine;
pub use event::{InfectionEvent, SpreadDecision, SpreadReport};
pub use population::{PersonRngs, Population, PopulationBuilder};
pub use state::{RumorCounts, RumorState};
