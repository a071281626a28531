//! Public error type for the engine.

use crate::{decoder::DecodeError, evaluator::ExecutionError};

/// Everything that can stop a program from running to completion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be decoded; nothing was evaluated.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Evaluation stopped with a fatal error.
    ///
    /// Output printed before the failure has already been written.
    #[error(transparent)]
    Runtime(#[from] ExecutionError),
}
