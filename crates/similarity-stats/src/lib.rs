//! Similarity Stats
//!
//! Turns raw face comparison scores into calibrated probabilities:
//! - Regularized incomplete gamma functions P/Q with Lanczos log-gamma
//! - Continued fraction evaluation with overflow rescaling
//! - Error function and normal CDF
//! - Pass/fail assessment against a score threshold

pub mod continued_fraction;
pub mod error;
pub mod gamma;
pub mod normal;
pub mod similarity;

pub use continued_fraction::ContinuedFraction;
pub use error::StatsError;
pub use gamma::{log_gamma, regularized_gamma_p, regularized_gamma_q};
pub use normal::{erf, NormalDistribution};
pub use similarity::{SimilarityAssessment, SimilaritySettings, DEFAULT_PASS_THRESHOLD};
