//! Configuration options for the engine.

use crate::{decoder::DecoderOptions, evaluator::EvaluatorOptions};

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use rinha_core::api::EngineOptions;
/// use rinha_core::evaluator::EvaluatorOptions;
///
/// let options = EngineOptions {
///     execution: EvaluatorOptions {
///         max_depth: 5_000,
///         memoize: false,
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Limits applied while decoding documents.
    pub decoding: DecoderOptions,

    /// Options for every run.
    pub execution: EvaluatorOptions,
}
