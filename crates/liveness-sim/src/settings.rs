//! Simulator configuration

use anyhow::{ensure, Context, Result};
use bearing_engine::LivenessSettings;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use similarity_stats::SimilaritySettings;
use std::path::Path;
use tracing::info;

/// Everything one simulated session needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Maximum level for the log subscriber (`trace` .. `error`)
    pub log_level: String,

    /// Seed for bearing selection and pose noise; entropy when absent
    pub seed: Option<u64>,

    /// Frames spent turning from one bearing target to the next
    pub frames_per_bearing: usize,

    /// Uniform noise added to each synthetic pose, in degrees
    pub jitter: f64,

    /// Probability that a frame has no detected face
    pub dropout_rate: f64,

    /// Face comparison score assessed at the end of the session
    pub score: f64,

    pub liveness: LivenessSettings,
    pub similarity: SimilaritySettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
            frames_per_bearing: 15,
            jitter: 1.0,
            dropout_rate: 0.0,
            score: 2.7,
            liveness: LivenessSettings::default(),
            similarity: SimilaritySettings::default(),
        }
    }
}

impl SimConfig {
    /// Load from defaults, an optional file and `SIM_*` environment variables.
    ///
    /// Nested keys use a double underscore, e.g. `SIM_LIVENESS__YAW_THRESHOLD=30`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading simulator config from {}", path.display());
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix("SIM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("liveness.bearings"),
        );

        let config: SimConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .context("Failed to read simulator config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.liveness.validate().context("Invalid liveness settings")?;
        self.similarity.distribution().context("Invalid similarity settings")?;
        ensure!(self.frames_per_bearing > 0, "frames_per_bearing must be > 0");
        ensure!(
            self.jitter.is_finite() && self.jitter >= 0.0,
            "jitter must be finite and non-negative, got {}",
            self.jitter
        );
        ensure!(
            (0.0..1.0).contains(&self.dropout_rate),
            "dropout_rate must be in [0, 1), got {}",
            self.dropout_rate
        );
        ensure!(self.score.is_finite(), "score must be finite, got {}", self.score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bearing_engine::Bearing;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = SimConfig {
            dropout_rate: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            frames_per_bearing: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.liveness.yaw_tolerance = 40.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_nested_file() {
        let path = std::env::temp_dir().join(format!("liveness-sim-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "seed = 7\njitter = 0.0\n\n[liveness]\nyaw_threshold = 20.0\nbearings = [\"STRAIGHT\", \"LEFT_UP\"]\n\n[similarity]\npass_threshold = 3.0"
        )
        .unwrap();
        drop(file);

        let config = SimConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.jitter, 0.0);
        assert_eq!(config.frames_per_bearing, 15);
        assert_eq!(config.liveness.yaw_threshold, 20.0);
        assert_eq!(config.liveness.pitch_threshold, 10.0);
        assert_eq!(config.liveness.bearings, vec![Bearing::Straight, Bearing::LeftUp]);
        assert_eq!(config.similarity.pass_threshold, 3.0);
        assert_eq!(config.similarity.standard_deviation, 1.0);
    }
}
