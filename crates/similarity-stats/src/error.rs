//! Statistics Error Types

use thiserror::Error;

/// Fatal errors from the numerical routines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Distribution parameter out of range
    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Series or continued fraction did not reach the requested precision
    #[error("Failed to converge within {iterations} iterations")]
    NonConvergence { iterations: u32 },

    /// Continued fraction convergents overflowed and could not be rescaled
    #[error("Continued fraction diverged to infinity for value {x}")]
    ContinuedFractionOverflow { x: f64 },

    /// Continued fraction produced NaN
    #[error("Continued fraction diverged to NaN for value {x}")]
    ContinuedFractionNaN { x: f64 },
}
