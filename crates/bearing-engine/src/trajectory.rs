//! Progress and heading of a head movement towards the requested bearing

use crate::{Bearing, BearingEvaluation};
use pose_geometry::Angle;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Per-frame movement metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryMetrics {
    /// Remaining distance to the requested target relative to the distance
    /// between the previous and requested targets, capped at 1 (0 = arrived)
    pub angle_distance: f64,
    /// 1 when the last step points straight at the target, 0 when directly away
    pub angle_trajectory: f64,
}

impl TrajectoryMetrics {
    /// Measure the step from `previous` to `current` while moving from bearing `from` to `to`
    pub fn measure(
        evaluation: &BearingEvaluation,
        previous: &Angle,
        current: &Angle,
        from: Bearing,
        to: Bearing,
    ) -> Self {
        let target = evaluation.angle_for_bearing(to);
        let from_angle = evaluation.angle_for_bearing(from);

        let heading_to_target = (previous.pitch - target.pitch).atan2(previous.yaw - target.yaw);
        let heading_to_current = (previous.pitch - current.pitch).atan2(previous.yaw - current.yaw);

        let span = target.distance_to(&from_angle);
        let angle_distance = if span != 0.0 {
            (target.distance_to(current) / span).min(1.0)
        } else {
            0.0
        };

        // Headings near ±π may land on opposite sides of the cut
        let mut heading_error = heading_to_target - heading_to_current;
        if heading_error > PI {
            heading_error -= 2.0 * PI;
        } else if heading_error < -PI {
            heading_error += 2.0 * PI;
        }

        Self {
            angle_distance,
            angle_trajectory: 1.0 - (heading_error / PI).abs(),
        }
    }
}
