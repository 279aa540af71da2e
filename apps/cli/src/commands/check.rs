//! `ojkit check`: validate the integer tokens of test files

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use ojkit_problem::parse_tokens;
use ojkit_validator::prelude::*;

use crate::config::Settings;

/// Whether values must fall inside a preset domain or outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Allow,
    Deny,
}

impl Mode {
    const fn allow(self) -> bool {
        matches!(self, Self::Allow)
    }
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files whose whitespace-separated integers are checked
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Signed 32-bit domain
    #[arg(long, value_name = "MODE")]
    pub int32: Option<Mode>,

    /// Unsigned 32-bit domain
    #[arg(long, value_name = "MODE")]
    pub uint32: Option<Mode>,

    /// Signed 64-bit domain
    #[arg(long, value_name = "MODE")]
    pub int64: Option<Mode>,

    /// Unsigned 64-bit domain
    #[arg(long, value_name = "MODE")]
    pub uint64: Option<Mode>,

    /// Positive integers
    #[arg(long, value_name = "MODE")]
    pub natural: Option<Mode>,

    /// Inclusive lower bound
    #[arg(long, allow_negative_numbers = true)]
    pub lo: Option<i128>,

    /// Inclusive upper bound
    #[arg(long, allow_negative_numbers = true)]
    pub hi: Option<i128>,

    /// Values must fit the operation budget of this many seconds
    #[arg(long, value_name = "SECS")]
    pub time_limit: Option<f64>,

    /// Assumed operations per second for --time-limit
    #[arg(long)]
    pub throughput: Option<f64>,

    /// Pass a file when any value passes instead of every value
    #[arg(long)]
    pub any: bool,

    /// Report failures as a false result instead of an error
    #[arg(long)]
    pub report: bool,
}

impl CheckArgs {
    /// Every validator selected by the flags.
    fn validators(&self, settings: &Settings) -> Result<Vec<Validator<i128>>> {
        let mut validators = Vec::new();

        let coverage = IntCoverage {
            int32: self.int32.map(Mode::allow),
            uint32: self.uint32.map(Mode::allow),
            int64: self.int64.map(Mode::allow),
            uint64: self.uint64.map(Mode::allow),
            natural: self.natural.map(Mode::allow),
        };
        if !coverage.is_empty() {
            validators.push(coverage.build()?.into());
        }
        if self.lo.is_some() || self.hi.is_some() {
            validators.push(RangeValidator::new(self.lo, self.hi)?.into());
        }
        if let Some(seconds) = self.time_limit {
            let budget = TimeBudget::new(seconds).with_throughput(settings.throughput);
            validators.push(budget.build()?.into());
        }

        if validators.is_empty() {
            return Err(ConfigError::NoConstraints.into());
        }
        Ok(validators)
    }
}

/// Returns `true` when every file passes.
pub fn run(args: &CheckArgs, settings: &Settings) -> Result<bool> {
    let validators = args.validators(settings)?;
    let on_failure = OnFailure::from_raise(!args.report);
    let mut passed = true;

    for path in &args.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let values = parse_tokens::<i128>(&text).map_err(|(token, e)| {
            anyhow::anyhow!("{}: `{token}` is not an integer: {e}", path.display())
        })?;

        let outcome = validators.iter().try_fold(true, |ok, validator| {
            let result = if args.any {
                validator.validate_any(&values, on_failure)
            } else {
                validator.validate_all(&values, on_failure)
            };
            result.map(|pass| ok && pass)
        });

        match outcome {
            Ok(true) => println!("ok    {} ({} values)", path.display(), values.len()),
            Ok(false) => {
                passed = false;
                println!("FAIL  {}", path.display());
            }
            Err(error) => {
                passed = false;
                println!("FAIL  {}: {error}", path.display());
            }
        }
        tracing::debug!(file = %path.display(), values = values.len(), "checked");
    }

    Ok(passed)
}
