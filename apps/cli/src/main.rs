//! ojkit CLI - check and package competitive-programming test data

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, pack};
use config::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "ojkit")]
#[command(about = "Constraint checks and judge archives for test data", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: ./ojkit.toml when present)
    #[arg(long, global = true, env = "OJKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "info,ojkit_problem=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format: pretty, compact or json
    #[arg(long, global = true)]
    log_format: Option<ojkit_log::Format>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every integer in the given files satisfies the constraints
    Check(check::CheckArgs),

    /// Pack a directory of test cases into a judge archive
    Pack(pack::PackArgs),
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            config: self.config.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            ..Overrides::default()
        };
        match &self.command {
            Commands::Check(args) => overrides.throughput = args.throughput,
            Commands::Pack(args) => overrides.normalize = args.normalize,
        }
        overrides
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.overrides())?;
    let _log = ojkit_log::init_with(settings.log.clone())?;
    tracing::debug!(?settings, "settings loaded");

    match &cli.command {
        Commands::Check(args) => {
            if check::run(args, &settings)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Pack(args) => {
            pack::run(args, &settings)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
