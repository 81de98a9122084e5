use te_core::TeError;
use te_economy::StateKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("stage `{stage}` has more than one policy emitting signal `{signal}`")]
    DuplicateSignal {
        stage:  &'static str,
        signal: &'static str,
    },

    #[error("stage `{stage}` has more than one update writing `{key}`")]
    DuplicateUpdate {
        stage: &'static str,
        key:   StateKey,
    },

    #[error("update in stage `{stage}` declared `{declared}` but wrote `{written}`")]
    KeyMismatch {
        stage:    &'static str,
        declared: StateKey,
        written:  StateKey,
    },

    /// A policy or update failed.  The model error is passed through as-is.
    #[error(transparent)]
    Model(#[from] TeError),
}

pub type SimResult<T> = Result<T, SimError>;
