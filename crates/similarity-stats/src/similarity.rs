//! Face similarity score calibration

use crate::normal::NormalDistribution;
use crate::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Score above which two faces are treated as the same person
pub const DEFAULT_PASS_THRESHOLD: f64 = 2.5;

/// Calibration of raw face comparison scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilaritySettings {
    pub mean: f64,
    pub standard_deviation: f64,
    pub pass_threshold: f64,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self {
            mean: 0.0,
            standard_deviation: 1.0,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

impl SimilaritySettings {
    /// Validated distribution described by these settings
    pub fn distribution(&self) -> Result<NormalDistribution, StatsError> {
        NormalDistribution::new(self.mean, self.standard_deviation)
    }
}

/// Outcome of comparing one score against the calibration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityAssessment {
    pub score: f64,
    /// Probability that a draw from the calibration falls at or below `score`
    pub probability: f64,
    pub passed: bool,
    pub pass_threshold: f64,
}

impl SimilarityAssessment {
    pub fn assess(score: f64, settings: &SimilaritySettings) -> Result<Self, StatsError> {
        let distribution = settings.distribution().map_err(|e| {
            warn!(error = %e, "Rejected similarity calibration");
            e
        })?;
        let probability = distribution.cumulative_probability(score)?;
        let passed = score > settings.pass_threshold;

        debug!(score, probability, passed, "Assessed face similarity");

        Ok(Self {
            score,
            probability,
            passed,
            pass_threshold: settings.pass_threshold,
        })
    }

    /// Probability as a percentage with three decimals, e.g. `99.379%`
    pub fn likelihood_percent(&self) -> String {
        format!("{:.3}%", self.probability * 100.0)
    }
}

impl fmt::Display for SimilarityAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(
                f,
                "Pass: score {:.1} indicates a likelihood of {} that both faces belong to the same person (threshold {:.1})",
                self.score,
                self.likelihood_percent(),
                self.pass_threshold
            )
        } else {
            write!(
                f,
                "Warning: score {:.1} indicates the faces likely belong to different people (threshold {:.1})",
                self.score, self.pass_threshold
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SimilaritySettings::default();
        assert_eq!(settings.pass_threshold, 2.5);
        assert_eq!(settings.distribution().unwrap(), NormalDistribution::standard());
    }

    #[test]
    fn test_passing_score() {
        let assessment = SimilarityAssessment::assess(3.2, &SimilaritySettings::default()).unwrap();
        assert!(assessment.passed);
        assert!(assessment.probability > 0.99);
        assert!(assessment.to_string().starts_with("Pass: score 3.2"));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let assessment = SimilarityAssessment::assess(2.5, &SimilaritySettings::default()).unwrap();
        assert!(!assessment.passed);
        assert_eq!(assessment.likelihood_percent(), "99.379%");
        assert!(assessment.to_string().starts_with("Warning"));
    }

    #[test]
    fn test_likelihood_formatting() {
        let assessment = SimilarityAssessment::assess(0.0, &SimilaritySettings::default()).unwrap();
        assert_eq!(assessment.likelihood_percent(), "50.000%");

        let assessment = SimilarityAssessment::assess(-1000.0, &SimilaritySettings::default()).unwrap();
        assert_eq!(assessment.likelihood_percent(), "0.000%");
    }

    #[test]
    fn test_invalid_calibration() {
        let settings = SimilaritySettings {
            standard_deviation: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SimilarityAssessment::assess(1.0, &settings),
            Err(StatsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_settings_from_partial_json() {
        let settings: SimilaritySettings = serde_json::from_str(r#"{"pass_threshold": 3.0}"#).unwrap();
        assert_eq!(settings.pass_threshold, 3.0);
        assert_eq!(settings.standard_deviation, 1.0);
    }
}
