//! Engine error type.
//!
//! Sub-crates either return `SwarmError` directly or wrap it as one variant
//! of their own enum.

use thiserror::Error;

use crate::{AgentId, PersonId};

/// The top-level error type for `swarm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `swarm-*` crates.
pub type SwarmResult<T> = Result<T, SwarmError>;
