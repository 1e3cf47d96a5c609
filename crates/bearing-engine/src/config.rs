//! Liveness session configuration

use crate::{Bearing, BearingError};
use ::config::{Config, Environment, File};
use pose_geometry::Axis;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Validated thresholds and tolerances for both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingThresholds {
    yaw_threshold: f64,
    pitch_threshold: f64,
    yaw_tolerance: f64,
    pitch_tolerance: f64,
}

impl BearingThresholds {
    /// Validate and create thresholds.
    ///
    /// Thresholds must be positive, tolerances non-negative, and each
    /// tolerance strictly smaller than its threshold so that the centred
    /// band and the deflected regions do not collapse or overlap.
    pub fn new(
        yaw_threshold: f64,
        pitch_threshold: f64,
        yaw_tolerance: f64,
        pitch_tolerance: f64,
    ) -> Result<Self, BearingError> {
        check_axis(Axis::Yaw, yaw_threshold, yaw_tolerance)?;
        check_axis(Axis::Pitch, pitch_threshold, pitch_tolerance)?;
        Ok(Self {
            yaw_threshold,
            pitch_threshold,
            yaw_tolerance,
            pitch_tolerance,
        })
    }

    pub fn threshold(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Yaw => self.yaw_threshold,
            Axis::Pitch => self.pitch_threshold,
        }
    }

    pub fn tolerance(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Yaw => self.yaw_tolerance,
            Axis::Pitch => self.pitch_tolerance,
        }
    }
}

fn check_axis(axis: Axis, threshold: f64, tolerance: f64) -> Result<(), BearingError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(BearingError::InvalidThreshold { axis, value: threshold });
    }
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(BearingError::InvalidTolerance { axis, value: tolerance });
    }
    if tolerance >= threshold {
        return Err(BearingError::ToleranceExceedsThreshold {
            axis,
            tolerance,
            threshold,
        });
    }
    Ok(())
}

/// Liveness session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LivenessSettings {
    /// Yaw deflection (degrees) at which the face counts as turned left/right
    pub yaw_threshold: f64,

    /// Pitch deflection (degrees) at which the face counts as tilted up/down
    pub pitch_threshold: f64,

    /// Slack around the yaw threshold
    pub yaw_tolerance: f64,

    /// Slack around the pitch threshold
    pub pitch_tolerance: f64,

    /// Number of frames averaged by the pose and bounds smoothers
    pub smoothing_window: usize,

    /// Number of bearings requested per session (first is always straight)
    pub face_capture_count: usize,

    /// Pool the session draws requested bearings from
    pub bearings: Vec<Bearing>,
}

impl Default for LivenessSettings {
    fn default() -> Self {
        Self {
            yaw_threshold: 28.0,
            pitch_threshold: 10.0,
            yaw_tolerance: 5.0,
            pitch_tolerance: 5.0,
            smoothing_window: 5,
            face_capture_count: 2,
            bearings: vec![
                Bearing::Straight,
                Bearing::Left,
                Bearing::Right,
                Bearing::LeftUp,
                Bearing::RightUp,
            ],
        }
    }
}

impl LivenessSettings {
    /// Create strict config (wider head turns, more captures)
    pub fn strict() -> Self {
        Self {
            yaw_threshold: 32.0,
            pitch_threshold: 15.0,
            face_capture_count: 3,
            ..Default::default()
        }
    }

    /// Create lenient config (smaller head turns, horizontal bearings only)
    pub fn lenient() -> Self {
        Self {
            yaw_threshold: 20.0,
            pitch_threshold: 10.0,
            bearings: vec![Bearing::Straight, Bearing::Left, Bearing::Right],
            ..Default::default()
        }
    }

    /// Load settings from defaults, an optional file and `LIVENESS_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, BearingError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading liveness settings from {}", path.display());
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix("LIVENESS")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("bearings"),
        );

        let settings: LivenessSettings = builder.build()?.try_deserialize()?;
        if let Err(e) = settings.validate() {
            warn!("Rejected liveness settings: {}", e);
            return Err(e);
        }
        Ok(settings)
    }

    /// Check the settings can drive a session
    pub fn validate(&self) -> Result<(), BearingError> {
        self.thresholds()?;
        if self.smoothing_window == 0 {
            return Err(BearingError::InvalidSmoothingWindow);
        }
        if self.bearings.is_empty() {
            return Err(BearingError::EmptyBearingPool);
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Result<BearingThresholds, BearingError> {
        BearingThresholds::new(
            self.yaw_threshold,
            self.pitch_threshold,
            self.yaw_tolerance,
            self.pitch_tolerance,
        )
    }
}
