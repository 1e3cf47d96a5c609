//! Liveness session simulator

use anyhow::Result;
use clap::Parser;
use liveness_sim::{init_logging, run_session, SimConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "liveness-sim", version, about = "Replay synthetic head poses through a liveness session")]
struct Cli {
    /// Config file (TOML, JSON or YAML); `SIM_*` environment variables override it
    config: Option<PathBuf>,

    /// Print the session report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SimConfig::load(cli.config.as_deref())?;
    init_logging(&config.log_level)?;

    info!("=== Liveness Simulator v{} ===", env!("CARGO_PKG_VERSION"));

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = run_session(&config, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for step in &report.steps {
            println!(
                "{:?}: {} (matched at {:?}, {} frames outside corridor)",
                step.bearing,
                if step.passed() { "ok" } else { "failed" },
                step.matched_at,
                step.frames_outside_corridor
            );
        }
        println!("Live: {}", report.live());
        println!("{}", report.similarity);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_config_and_json_flag() {
        let cli = Cli::try_parse_from(["liveness-sim", "session.toml", "--json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("session.toml")));
        assert!(cli.json);

        let cli = Cli::try_parse_from(["liveness-sim"]).unwrap();
        assert_eq!(cli.config, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Cli::try_parse_from(["liveness-sim", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["liveness-sim", "--jsn"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
