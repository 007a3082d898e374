//! Run command - full map → reduce → merge pipeline

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{format_error, log_success};
use super::seeded_rng;
use crate::config::PipelineConfig;
use crate::pipeline::run_pipeline;

/// Run a pipeline config (the built-in multilingual one by default)
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Pipeline config (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory relative paths are resolved against
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Seed for the reducer (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: RunArgs, quiet: bool) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => PipelineConfig::load(path)
            .map_err(|e| format_error("load pipeline config", &e.to_string()))?,
        None => {
            log::info!("using built-in multilingual pipeline");
            PipelineConfig::multilingual()
        }
    };

    let mut rng = seeded_rng(args.seed.or(config.seed));
    let report = run_pipeline(&config, &args.dir, &mut rng)
        .map_err(|e| format_error("run pipeline", &e.to_string()))?;

    log_success(
        &format!(
            "mapped {} files, ran {} reduce jobs",
            report.mapped.len(),
            report.reduced_sizes.len()
        ),
        quiet,
    );
    for (path, count) in &report.merged {
        log_success(&format!("{} documents -> {}", count, path.display()), quiet);
    }
    Ok(())
}
