//! Bearing Engine Error Types

use pose_geometry::Axis;
use thiserror::Error;

/// Errors raised while configuring the bearing engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BearingError {
    /// Threshold is not a positive finite number
    #[error("{axis:?} threshold {value} must be a positive finite number")]
    InvalidThreshold { axis: Axis, value: f64 },

    /// Tolerance is negative or not finite
    #[error("{axis:?} tolerance {value} must be a non-negative finite number")]
    InvalidTolerance { axis: Axis, value: f64 },

    /// Tolerance leaves no room for the bearing regions
    #[error("{axis:?} tolerance {tolerance} must be smaller than threshold {threshold}")]
    ToleranceExceedsThreshold {
        axis: Axis,
        tolerance: f64,
        threshold: f64,
    },

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// No bearings to draw capture targets from
    #[error("Bearing pool is empty")]
    EmptyBearingPool,

    /// Smoothing window of zero samples
    #[error("Smoothing window must be at least one sample")]
    InvalidSmoothingWindow,
}

impl From<::config::ConfigError> for BearingError {
    fn from(err: ::config::ConfigError) -> Self {
        BearingError::Config(err.to_string())
    }
}
