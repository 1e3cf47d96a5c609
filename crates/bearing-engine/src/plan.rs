//! Random sequence of requested bearings for one session

use crate::{Bearing, BearingEvaluation};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Yields the bearings a session asks for, starting with straight.
///
/// Each following bearing is drawn from the pool, excluding the current one
/// and preferring bearings with a different yaw target so consecutive
/// requests need a visible head turn.
#[derive(Debug, Clone)]
pub struct CaptureBearingPlan<R> {
    evaluation: BearingEvaluation,
    pool: Vec<Bearing>,
    count: usize,
    emitted: usize,
    current: Bearing,
    rng: R,
}

impl<R: Rng> CaptureBearingPlan<R> {
    pub fn new(evaluation: BearingEvaluation, pool: Vec<Bearing>, count: usize, rng: R) -> Self {
        Self {
            evaluation,
            pool,
            count,
            emitted: 0,
            current: Bearing::Straight,
            rng,
        }
    }

    fn select_next(&mut self) -> Bearing {
        let current = self.current;
        let current_yaw = self.evaluation.angle_for_bearing(current).yaw;

        let mut available: Vec<Bearing> = self
            .pool
            .iter()
            .copied()
            .filter(|&b| b != current && self.evaluation.angle_for_bearing(b).yaw != current_yaw)
            .collect();
        if available.is_empty() {
            available = self.pool.iter().copied().filter(|&b| b != current).collect();
        }

        available.choose(&mut self.rng).copied().unwrap_or(current)
    }
}

impl<R: Rng> Iterator for CaptureBearingPlan<R> {
    type Item = Bearing;

    fn next(&mut self) -> Option<Bearing> {
        if self.emitted >= self.count {
            return None;
        }
        if self.emitted > 0 {
            self.current = self.select_next();
        }
        self.emitted += 1;
        debug!("Requesting bearing {:?} ({}/{})", self.current, self.emitted, self.count);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.emitted);
        (remaining, Some(remaining))
    }
}
