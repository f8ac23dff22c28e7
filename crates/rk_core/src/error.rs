//! Error types for problem configuration and integration.

use thiserror::Error;

/// Rejected problem configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid bound {name} must be finite (got {value})")]
    NonFiniteBound { name: &'static str, value: f64 },
    #[error("grid step must be positive (got {0})")]
    NonPositiveStep(f64),
    #[error("grid stop must not precede start (start {start}, stop {stop})")]
    ReversedBounds { start: f64, stop: f64 },
    #[error("initial value y0 must be finite (got {0})")]
    NonFiniteInitialValue(f64),
}

/// Failure to set up an integration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("initial-condition index {index} is outside a grid of {len} points")]
    InitialIndexOutOfRange { index: usize, len: usize },
}
