//! Merge command - concatenate datasets

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{format_error, log_success};
use crate::merge::merge_datasets;

/// Concatenate datasets into one file
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Input files, in output order
    #[arg(short, long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Merged file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

pub fn run(args: MergeArgs, quiet: bool) -> Result<(), String> {
    let count = merge_datasets(&args.inputs, &args.output)
        .map_err(|e| format_error("merge datasets", &e.to_string()))?;

    log_success(
        &format!("{} documents -> {}", count, args.output.display()),
        quiet,
    );
    Ok(())
}
