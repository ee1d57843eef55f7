//! `swarm-agent`: Structure-of-Arrays kinematic agent storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)         |
//! | [`kinematics`]  | `apply_force`, `integrate`, `wrap_edges`, pinning, hit testing |
//! | [`builder`]     | `AgentStoreBuilder`, `RoleGroup`                               |
//!
//! Every role (leader, follower, influencer, user) lives in the same store
//! and shares the same integration and wrap logic.  What differs per role is
//! decided upstream by the steering table in `swarm-steer`.

pub mod builder;
pub mod kinematics;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{AgentStoreBuilder, RoleGroup};
pub use store::{AgentRngs, AgentStore};
