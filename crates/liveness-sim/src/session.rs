//! Simulated liveness session
//!
//! Requests bearings from a [`CaptureBearingPlan`] and replays a head turn
//! towards each one through a [`PoseTracker`], then assesses a face
//! comparison score.

use crate::settings::SimConfig;
use anyhow::Result;
use bearing_engine::{
    Angle, Bearing, BearingEvaluation, BearingTransition, CaptureBearingPlan, PoseTracker,
};
use rand::Rng;
use serde::Serialize;
use similarity_stats::SimilarityAssessment;
use tracing::{debug, info, warn};

/// Result of requesting one bearing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub bearing: Bearing,
    pub frames: usize,
    /// Frames without a detected face
    pub dropped_frames: usize,
    /// First frame whose smoothed pose matched the bearing
    pub matched_at: Option<usize>,
    /// Frames whose smoothed pose was outside the corridor
    pub frames_outside_corridor: usize,
    /// Mean trajectory score over the frames that had one
    pub mean_trajectory: Option<f64>,
    pub transition: BearingTransition,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        self.matched_at.is_some() && self.transition == BearingTransition::Completed
    }
}

/// Outcome of a whole session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub steps: Vec<StepReport>,
    pub similarity: SimilarityAssessment,
}

impl SessionReport {
    /// Every requested bearing was reached without moving the wrong way
    pub fn live(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(StepReport::passed)
    }
}

/// Synthetic detector output for one head turn from `start` to `target`
fn head_turn<R: Rng>(start: Angle, target: Angle, config: &SimConfig, rng: &mut R) -> Vec<Option<Angle>> {
    let turn = config.frames_per_bearing;
    let hold = config.liveness.smoothing_window;
    (1..=turn + hold)
        .map(|frame| {
            if config.dropout_rate > 0.0 && rng.gen_bool(config.dropout_rate) {
                return None;
            }
            let t = (frame as f64 / turn as f64).min(1.0);
            let mut pose = Angle::new(
                start.yaw + (target.yaw - start.yaw) * t,
                start.pitch + (target.pitch - start.pitch) * t,
            );
            if config.jitter > 0.0 {
                pose.yaw += rng.gen_range(-config.jitter..=config.jitter);
                pose.pitch += rng.gen_range(-config.jitter..=config.jitter);
            }
            Some(pose)
        })
        .collect()
}

/// Run one session with the given randomness source
pub fn run_session<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<SessionReport> {
    config.validate()?;
    let settings = &config.liveness;
    let evaluation = BearingEvaluation::new(settings.thresholds()?);
    let mut tracker = PoseTracker::from_settings(settings)?;

    let bearings: Vec<Bearing> = CaptureBearingPlan::new(
        evaluation,
        settings.bearings.clone(),
        settings.face_capture_count,
        &mut *rng,
    )
    .collect();
    info!("Session requests {:?}", bearings);

    let mut steps = Vec::with_capacity(bearings.len());
    let mut start = Angle::ZERO;

    for (index, &bearing) in bearings.iter().enumerate() {
        let target = evaluation.angle_for_bearing(bearing);
        let frames = head_turn(start, target, config, rng);

        let mut matched_at = None;
        let mut dropped_frames = 0;
        let mut frames_outside_corridor = 0;
        let mut trajectory_sum = 0.0;
        let mut trajectory_count = 0usize;

        for (frame, pose) in frames.iter().enumerate() {
            let observation = tracker.observe(*pose);
            if pose.is_none() {
                dropped_frames += 1;
            }
            if observation.smoothed.is_none() {
                continue;
            }
            if observation.matches {
                matched_at.get_or_insert(frame);
            }
            if !observation.between {
                frames_outside_corridor += 1;
            }
            if let Some(metrics) = observation.trajectory {
                trajectory_sum += metrics.angle_trajectory;
                trajectory_count += 1;
            }
        }

        // The last bearing is closed by re-requesting it
        let next = bearings.get(index + 1).copied().unwrap_or(bearing);
        let transition = tracker.advance_to(next);

        let step = StepReport {
            bearing,
            frames: frames.len(),
            dropped_frames,
            matched_at,
            frames_outside_corridor,
            mean_trajectory: (trajectory_count > 0).then(|| trajectory_sum / trajectory_count as f64),
            transition,
        };
        if step.passed() {
            info!("Bearing {:?} reached at frame {:?}", bearing, step.matched_at);
        } else {
            warn!("Bearing {:?} not completed: {:?}", bearing, step);
        }
        debug!("Step report: {:?}", step);
        steps.push(step);
        start = target;
    }

    let similarity = SimilarityAssessment::assess(config.score, &config.similarity)?;
    info!("{}", similarity);

    Ok(SessionReport { steps, similarity })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_config() -> SimConfig {
        SimConfig {
            seed: Some(1),
            jitter: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_session_is_live() {
        let config = quiet_config();
        let report = run_session(&config, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(report.steps.len(), config.liveness.face_capture_count);
        assert_eq!(report.steps[0].bearing, Bearing::Straight);
        assert_ne!(report.steps[1].bearing, Bearing::Straight);
        for step in &report.steps {
            assert!(step.passed(), "{step:?}");
            assert_eq!(step.frames_outside_corridor, 0);
            assert_eq!(step.dropped_frames, 0);
        }
        assert!(report.live());
    }

    #[test]
    fn test_straight_matches_immediately() {
        let report = run_session(&quiet_config(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(report.steps[0].matched_at, Some(0));
        assert!(report.steps[1].matched_at.unwrap() > 0);
    }

    #[test]
    fn test_longer_session() {
        let mut config = quiet_config();
        config.liveness.face_capture_count = 5;
        let report = run_session(&config, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(report.steps.len(), 5);
        for pair in report.steps.windows(2) {
            assert_ne!(pair[0].bearing, pair[1].bearing);
        }
        assert!(report.live());
    }

    #[test]
    fn test_dropped_frames_are_counted() {
        let config = SimConfig {
            dropout_rate: 0.5,
            ..quiet_config()
        };
        let report = run_session(&config, &mut StdRng::seed_from_u64(5)).unwrap();
        let dropped: usize = report.steps.iter().map(|s| s.dropped_frames).sum();
        let frames: usize = report.steps.iter().map(|s| s.frames).sum();
        assert!(dropped > 0);
        assert!(dropped < frames);
    }

    #[test]
    fn test_similarity_is_assessed() {
        let config = SimConfig {
            score: 1.0,
            ..quiet_config()
        };
        let report = run_session(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(!report.similarity.passed);
        assert!((report.similarity.probability - 0.8413).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = quiet_config();
        config.liveness.bearings.clear();
        assert!(run_session(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }
}
