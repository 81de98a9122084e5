use thiserror::Error;

use te_core::TeError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("stakeholder table parse error: {0}")]
    Parse(String),

    #[error("duplicate agent name `{0}`")]
    DuplicateName(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AgentError> for TeError {
    fn from(e: AgentError) -> Self {
        match e {
            AgentError::Io(io) => TeError::Io(io),
            other => TeError::Configuration(other.to_string()),
        }
    }
}

pub type AgentResult<T> = Result<T, AgentError>;
