//! Normal distribution and error function

use crate::gamma::regularized_gamma_p;
use crate::StatsError;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

/// Beyond this many standard deviations the CDF is taken as exactly 0 or 1
const SATURATION_DEVIATIONS: f64 = 40.0;

/// Precision passed to P(0.5, x²) when evaluating erf
const ERF_EPSILON: f64 = 1.0e-15;

/// Iteration cap passed to P(0.5, x²) when evaluating erf
const ERF_MAX_ITERATIONS: u32 = 10_000;

/// Error function
///
/// Computed as `sign(x) · P(0.5, x²)`; saturates to ±1 when `|x| > 40`.
pub fn erf(x: f64) -> Result<f64, StatsError> {
    if x.abs() > SATURATION_DEVIATIONS {
        return Ok(if x > 0.0 { 1.0 } else { -1.0 });
    }
    let ret = regularized_gamma_p(0.5, x * x, ERF_EPSILON, ERF_MAX_ITERATIONS)?;
    Ok(if x < 0.0 { -ret } else { ret })
}

/// Normal distribution with fixed mean and standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalDistribution {
    pub mean: f64,
    pub standard_deviation: f64,
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self {
            mean: 0.0,
            standard_deviation: 1.0,
        }
    }
}

impl NormalDistribution {
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Self, StatsError> {
        if !mean.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "mean",
                value: mean,
            });
        }
        if !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "standard deviation",
                value: standard_deviation,
            });
        }
        Ok(Self {
            mean,
            standard_deviation,
        })
    }

    /// Standard normal distribution N(0, 1)
    pub fn standard() -> Self {
        Self::default()
    }

    /// P(X <= x)
    pub fn cumulative_probability(&self, x: f64) -> Result<f64, StatsError> {
        let deviation = x - self.mean;
        if deviation.abs() > SATURATION_DEVIATIONS * self.standard_deviation {
            return Ok(if deviation < 0.0 { 0.0 } else { 1.0 });
        }
        Ok(0.5 * (1.0 + erf(deviation / (self.standard_deviation * SQRT_2))?))
    }
}
