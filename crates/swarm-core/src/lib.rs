//! `swarm-core`: foundational types for the swarm steering engine.
//!
//! This crate is a dependency of every other `swarm-*` crate.  It has no
//! `swarm-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PersonId`                                     |
//! | [`vec2`]        | `Vec2` re-export, `SteerVec` (limit / set_mag / heading)  |
//! | [`role`]        | `Role` tag for kinematic agents                           |
//! | [`time`]        | `Tick`, `SimClock`                                        |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`config`]      | `WorldConfig`, `FlockConfig`, `InfluenceConfig`, `RumorConfig`, `SimConfig` |
//! | [`error`]       | `SwarmError`, `SwarmResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load configuration files.                      |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod role;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FlockConfig, InfluenceConfig, RumorConfig, SimConfig, WorldConfig};
pub use error::{SwarmError, SwarmResult};
pub use ids::{AgentId, PersonId};
pub use rng::{AgentRng, SimRng};
pub use role::Role;
pub use time::{SimClock, Tick};
pub use vec2::{SteerVec, Vec2};
