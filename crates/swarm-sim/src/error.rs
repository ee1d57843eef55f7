use swarm_core::{AgentId, Role, SwarmError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{agent} is a {role} and cannot be dragged")]
    NotDraggable {
        agent: AgentId,
        role:  Role,
    },

    #[error(transparent)]
    Swarm(#[from] SwarmError),
}

pub type SimResult<T> = Result<T, SimError>;
