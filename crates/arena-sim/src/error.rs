use arena_core::CoreError;
use thiserror::Error;

use crate::driver::LifecycleState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot {operation} a simulation that is {state}")]
    InvalidState {
        operation: &'static str,
        state:     LifecycleState,
    },

    #[error("configuration rejected: {0}")]
    Config(#[from] CoreError),

    #[error("failed to spawn the step worker: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
