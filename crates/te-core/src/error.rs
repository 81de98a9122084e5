//! Model error type shared by every policy and state-update function.
//!
//! Engine-level wiring problems live in `te-sim`'s `SimError`, which wraps
//! `TeError` transparently so the original message reaches the caller.

use thiserror::Error;

use crate::Timestep;

/// Errors raised while evaluating the token-economy model.
///
/// None of these are transient: they stem from invalid configuration or a
/// broken stage ordering, so callers never retry them.
#[derive(Debug, Error)]
pub enum TeError {
    /// A required parameter key is absent from the bundle.
    #[error("missing required parameter: {key}")]
    MissingParameter { key: String },

    /// A selector or value holds something the model does not recognise.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A stage consumed a per-agent behavior that the behavior-assignment
    /// stage should have produced earlier in the same timestep.
    #[error("agent {agent} has no behavior profile for {timestep}")]
    MissingAllocation { agent: String, timestep: Timestep },

    #[error("agent {0} not found")]
    AgentNotFound(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TeError {
    pub fn missing(key: &str) -> Self {
        TeError::MissingParameter { key: key.to_owned() }
    }
}

/// Shorthand result type for all `te-*` crates.
pub type TeResult<T> = Result<T, TeError>;
