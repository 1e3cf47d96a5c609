//! Per-frame pose tracking against the requested bearing

use crate::{Bearing, BearingError, BearingEvaluation, LivenessSettings, TrajectoryMetrics};
use pose_geometry::Angle;
use serde::{Deserialize, Serialize};
use smoothing::{AngleSmoothing, Smoother};
use tracing::{debug, info};

/// Result of feeding one frame to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseObservation {
    /// Smoothed pose, `None` until a face has been seen
    pub smoothed: Option<Angle>,
    /// Bearing the subject is moving away from
    pub previous_bearing: Bearing,
    /// Bearing the subject is asked to assume
    pub requested_bearing: Bearing,
    /// Smoothed pose is inside the requested bearing's region
    pub matches: bool,
    /// Smoothed pose is inside the corridor from the previous to the requested bearing.
    /// Without a transition there is no corridor and this equals `matches`.
    pub between: bool,
    /// Normalised correction towards the requested bearing
    pub offset: Angle,
    /// Movement since the previous smoothed pose
    pub trajectory: Option<TrajectoryMetrics>,
}

/// Outcome of switching to the next requested bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BearingTransition {
    /// Every pose recorded since the last switch stayed in the corridor
    Completed,
    /// At least one recorded pose left the corridor
    MovedOpposite,
}

/// Smooths detector poses and evaluates them against the requested bearing
#[derive(Debug, Clone)]
pub struct PoseTracker {
    evaluation: BearingEvaluation,
    smoothing: AngleSmoothing,
    /// Raw poses since the last bearing switch
    history: Vec<Angle>,
    previous_smoothed: Option<Angle>,
    previous_bearing: Bearing,
    requested_bearing: Bearing,
}

impl PoseTracker {
    /// Create a tracker requesting a straight bearing
    pub fn new(evaluation: BearingEvaluation, smoothing_window: usize) -> Result<Self, BearingError> {
        if smoothing_window == 0 {
            return Err(BearingError::InvalidSmoothingWindow);
        }
        Ok(Self {
            evaluation,
            smoothing: AngleSmoothing::new(smoothing_window),
            history: Vec::new(),
            previous_smoothed: None,
            previous_bearing: Bearing::Straight,
            requested_bearing: Bearing::Straight,
        })
    }

    pub fn from_settings(settings: &LivenessSettings) -> Result<Self, BearingError> {
        settings.validate()?;
        let evaluation = BearingEvaluation::new(settings.thresholds()?);
        info!(
            "Creating pose tracker: yaw {}±{}, pitch {}±{}, window {}",
            settings.yaw_threshold,
            settings.yaw_tolerance,
            settings.pitch_threshold,
            settings.pitch_tolerance,
            settings.smoothing_window
        );
        Self::new(evaluation, settings.smoothing_window)
    }

    pub fn evaluation(&self) -> &BearingEvaluation {
        &self.evaluation
    }

    pub fn requested_bearing(&self) -> Bearing {
        self.requested_bearing
    }

    pub fn previous_bearing(&self) -> Bearing {
        self.previous_bearing
    }

    /// Feed one frame; `None` means the detector found no face and rewinds the smoothing window
    pub fn observe(&mut self, angle: Option<Angle>) -> PoseObservation {
        match angle {
            Some(angle) => {
                self.smoothing.add_sample(angle);
                self.history.push(angle);
            }
            None => self.smoothing.remove_first_sample(),
        }

        let smoothed = self.smoothing.smoothed_value();
        let (from, to) = (self.previous_bearing, self.requested_bearing);

        let trajectory = match (self.previous_smoothed, smoothed, angle) {
            (Some(previous), Some(current), Some(_)) => Some(TrajectoryMetrics::measure(
                &self.evaluation,
                &previous,
                &current,
                from,
                to,
            )),
            _ => None,
        };
        self.previous_smoothed = angle.and(smoothed);

        let observation = match smoothed {
            Some(current) => {
                let matches = self.evaluation.angle_matches_bearing(&current, to);
                PoseObservation {
                    smoothed,
                    previous_bearing: from,
                    requested_bearing: to,
                    matches,
                    between: if from == to {
                        matches
                    } else {
                        self.evaluation.is_angle_between_bearings(&current, from, to)
                    },
                    offset: self.evaluation.offset_from_angle_to_bearing(&current, to),
                    trajectory,
                }
            }
            None => PoseObservation {
                smoothed: None,
                previous_bearing: from,
                requested_bearing: to,
                matches: false,
                between: false,
                offset: self.evaluation.offset_from_angle_to_bearing(&Angle::ZERO, to),
                trajectory: None,
            },
        };

        if from != to && observation.smoothed.is_some() && !observation.between {
            debug!("Pose left corridor {:?} -> {:?}: {:?}", from, to, observation.smoothed);
        }
        observation
    }

    /// Switch to the next requested bearing, checking the recorded path on the way
    pub fn advance_to(&mut self, next: Bearing) -> BearingTransition {
        let transition = if self.evaluation.moved_opposite(
            &self.history,
            self.previous_bearing,
            self.requested_bearing,
        ) {
            BearingTransition::MovedOpposite
        } else {
            BearingTransition::Completed
        };
        debug!(
            "Bearing {:?} -> {:?} finished ({:?}), next {:?}",
            self.previous_bearing, self.requested_bearing, transition, next
        );
        self.history.clear();
        self.previous_bearing = self.requested_bearing;
        self.requested_bearing = next;
        transition
    }

    /// Clear smoothing and history and go back to requesting a straight bearing
    pub fn reset(&mut self) {
        self.smoothing.reset();
        self.history.clear();
        self.previous_smoothed = None;
        self.previous_bearing = Bearing::Straight;
        self.requested_bearing = Bearing::Straight;
    }
}
