//! Angle/bearing evaluation
//!
//! Maps between the continuous yaw/pitch space and the nine named bearings:
//! nominal target angles, target regions, transition corridors between two
//! bearings and normalised corrections towards a bearing.

use crate::bearing::AxisDirection;
use crate::{Bearing, BearingThresholds};
use pose_geometry::{Angle, Axis};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Target region and nominal angle of a bearing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRequirements {
    /// Exclusive lower bounds
    pub min: Angle,
    /// Exclusive upper bounds
    pub max: Angle,
    /// Nominal centre of the target
    pub target: Angle,
}

/// Evaluates head pose angles against bearings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingEvaluation {
    thresholds: BearingThresholds,
}

impl BearingEvaluation {
    pub fn new(thresholds: BearingThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &BearingThresholds {
        &self.thresholds
    }

    pub fn threshold_for_axis(&self, axis: Axis) -> f64 {
        self.thresholds.threshold(axis)
    }

    pub fn tolerance_for_axis(&self, axis: Axis) -> f64 {
        self.thresholds.tolerance(axis)
    }

    /// Nominal centre of the bearing's target region
    pub fn angle_for_bearing(&self, bearing: Bearing) -> Angle {
        let direction = bearing.direction();
        let component = |axis: Axis| direction.along(axis).sign() * self.threshold_for_axis(axis);
        Angle::new(component(Axis::Yaw), component(Axis::Pitch))
    }

    /// Exclusive (min, max) bounds of the bearing's region along one axis
    fn bounds(&self, bearing: Bearing, axis: Axis) -> (f64, f64) {
        let threshold = self.threshold_for_axis(axis);
        let tolerance = self.tolerance_for_axis(axis);
        match bearing.direction().along(axis) {
            AxisDirection::Positive => (threshold - tolerance, f64::INFINITY),
            AxisDirection::Negative => (f64::NEG_INFINITY, tolerance - threshold),
            AxisDirection::Centered => (tolerance - threshold, threshold - tolerance),
        }
    }

    pub fn min_angle_for_bearing(&self, bearing: Bearing) -> Angle {
        Angle::new(self.bounds(bearing, Axis::Yaw).0, self.bounds(bearing, Axis::Pitch).0)
    }

    pub fn max_angle_for_bearing(&self, bearing: Bearing) -> Angle {
        Angle::new(self.bounds(bearing, Axis::Yaw).1, self.bounds(bearing, Axis::Pitch).1)
    }

    pub fn requirements_for_bearing(&self, bearing: Bearing) -> AngleRequirements {
        AngleRequirements {
            min: self.min_angle_for_bearing(bearing),
            max: self.max_angle_for_bearing(bearing),
            target: self.angle_for_bearing(bearing),
        }
    }

    /// Whether the angle lies strictly inside the bearing's target region
    pub fn angle_matches_bearing(&self, angle: &Angle, bearing: Bearing) -> bool {
        let min = self.min_angle_for_bearing(bearing);
        let max = self.max_angle_for_bearing(bearing);
        angle.pitch > min.pitch && angle.pitch < max.pitch && angle.yaw > min.yaw && angle.yaw < max.yaw
    }

    /// Whether the angle lies in the corridor leading from one bearing to another.
    ///
    /// The corridor is bounded by two lines parallel to `from → to`, offset by
    /// the larger threshold on either side, and starts at the cross line
    /// through `from`. Angles behind that cross line still count while they
    /// are within the same radius of the `from` target.
    pub fn is_angle_between_bearings(&self, angle: &Angle, from: Bearing, to: Bearing) -> bool {
        if self.angle_matches_bearing(angle, from) || self.angle_matches_bearing(angle, to) {
            return true;
        }
        let from_angle = self.angle_for_bearing(from);
        let to_angle = self.angle_for_bearing(to);
        let radius = self
            .threshold_for_axis(Axis::Pitch)
            .max(self.threshold_for_axis(Axis::Yaw));

        let normal = (to_angle.pitch - from_angle.pitch).atan2(to_angle.yaw - from_angle.yaw) + FRAC_PI_2;
        let d_yaw = normal.cos() * radius;
        let d_pitch = normal.sin() * radius;

        let start_right = Angle::new(from_angle.yaw + d_yaw, from_angle.pitch + d_pitch);
        let start_left = Angle::new(from_angle.yaw - d_yaw, from_angle.pitch - d_pitch);
        let end_right = Angle::new(to_angle.yaw + d_yaw, to_angle.pitch + d_pitch);
        let end_left = Angle::new(to_angle.yaw - d_yaw, to_angle.pitch - d_pitch);

        let inside_right_edge = !is_right_of_line(angle, &start_right, &end_right);
        let inside_left_edge = is_right_of_line(angle, &start_left, &end_left);
        let past_start = is_right_of_line(angle, &start_right, &start_left);
        let near_start = angle.distance_to(&from_angle) < radius;

        inside_right_edge && inside_left_edge && (past_start || near_start)
    }

    /// Correction from the angle towards the bearing in units of threshold + tolerance.
    ///
    /// Zero when the angle already matches.
    pub fn offset_from_angle_to_bearing(&self, angle: &Angle, bearing: Bearing) -> Angle {
        if self.angle_matches_bearing(angle, bearing) {
            return Angle::ZERO;
        }
        let target = self.angle_for_bearing(bearing);
        let span = |axis: Axis| self.threshold_for_axis(axis) + self.tolerance_for_axis(axis);
        Angle::new(
            (target.yaw - angle.yaw) / span(Axis::Yaw),
            (target.pitch - angle.pitch) / span(Axis::Pitch),
        )
    }

    /// Whether any angle in the history strayed outside the corridor from `from` to `to`.
    ///
    /// Always false when the two bearings are the same.
    pub fn moved_opposite<'a>(
        &self,
        history: impl IntoIterator<Item = &'a Angle>,
        from: Bearing,
        to: Bearing,
    ) -> bool {
        if from == to {
            return false;
        }
        history
            .into_iter()
            .any(|angle| !self.is_angle_between_bearings(angle, from, to))
    }
}

/// Sign of the 2D cross product `(point - start) × (end - start)`; zero counts as right
fn is_right_of_line(point: &Angle, start: &Angle, end: &Angle) -> bool {
    let d = (point.yaw - start.yaw) * (end.pitch - start.pitch)
        - (point.pitch - start.pitch) * (end.yaw - start.yaw);
    d <= 0.0
}
