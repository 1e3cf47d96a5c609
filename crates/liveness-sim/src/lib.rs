//! Liveness Simulator
//!
//! Drives the bearing engine with synthetic head poses so thresholds,
//! smoothing windows and similarity calibration can be tried offline.

pub mod session;
pub mod settings;

pub use session::{run_session, SessionReport, StepReport};
pub use settings::SimConfig;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global log subscriber; unknown levels fall back to INFO
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
