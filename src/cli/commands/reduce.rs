//! Reduce command - down-sample datasets to the smallest one

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{format_error, log_success};
use super::seeded_rng;
use crate::reduce::reduce_datasets;

/// Down-sample datasets to the size of the smallest one
#[derive(Parser, Debug)]
pub struct ReduceArgs {
    /// Input files
    #[arg(short, long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output files, one per input
    #[arg(short, long = "output", value_name = "FILE", required = true, num_args = 1..)]
    pub outputs: Vec<PathBuf>,

    /// Seed for the sampler
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: ReduceArgs, quiet: bool) -> Result<(), String> {
    let mut rng = seeded_rng(args.seed);
    let size = reduce_datasets(&args.inputs, &args.outputs, &mut rng)
        .map_err(|e| format_error("reduce datasets", &e.to_string()))?;

    log_success(
        &format!("reduced {} datasets to {} documents each", args.inputs.len(), size),
        quiet,
    );
    Ok(())
}
