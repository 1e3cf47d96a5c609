//! Bearing Engine
//!
//! Head pose geometry for liveness checks:
//! - Nine named bearings and their target regions in yaw/pitch space
//! - Transition corridors between two bearings
//! - Normalised correction offsets for on-screen guidance
//! - Smoothed per-frame tracking and random capture bearing plans

pub mod bearing;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod plan;
pub mod tracker;
pub mod trajectory;

pub use bearing::{AxisDirection, Bearing, BearingDirection};
pub use self::config::{BearingThresholds, LivenessSettings};
pub use error::BearingError;
pub use evaluation::{AngleRequirements, BearingEvaluation};
pub use plan::CaptureBearingPlan;
pub use tracker::{BearingTransition, PoseObservation, PoseTracker};
pub use trajectory::TrajectoryMetrics;

pub use pose_geometry::{Angle, Axis};
