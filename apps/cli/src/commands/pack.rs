//! `ojkit pack`: build a judge archive from a directory of test cases

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use ojkit_problem::Problem;

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct PackArgs {
    /// Directory holding `X.in` / `X.out` pairs
    pub dir: PathBuf,

    /// Problem title; names the archive by default
    #[arg(long)]
    pub title: String,

    /// Output path (default: ./<title>.zip, or ./<title> with --as-dir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write a plain directory instead of a zip archive
    #[arg(long)]
    pub as_dir: bool,

    /// Mark the problem as judged by a special judge
    #[arg(long)]
    pub spj: bool,

    /// Normalize whitespace of every test case before packing
    #[arg(long)]
    pub normalize: bool,
}

pub fn run(args: &PackArgs, settings: &Settings) -> Result<()> {
    let mut problem = Problem::load_dir(&args.title, &args.dir)
        .with_context(|| format!("failed to load test cases from {}", args.dir.display()))?
        .with_spj(args.spj);

    if problem.is_empty() {
        bail!("no test cases found in {}", args.dir.display());
    }
    if settings.normalize {
        problem = problem.normalized();
    }

    let out = match (&args.out, args.as_dir) {
        (Some(out), _) => out.clone(),
        (None, true) => problem.default_dir_path(),
        (None, false) => problem.default_archive_path(),
    };
    let written = if args.as_dir {
        problem.write_dir(&out)
    } else {
        problem.write_zip(&out)
    };
    written.with_context(|| format!("failed to write {}", out.display()))?;

    println!("packed {} test case(s) into {}", problem.len(), out.display());
    Ok(())
}
