//! ner-harmonize - label mapping, uniform reduction and merging of
//! Label Studio NER datasets
//!
//! ```bash
//! ner-harmonize run --dir data/ --seed 42
//! ner-harmonize map --preset es -i es_train.json -o es_train_mapped.json
//! ner-harmonize reduce -i a.json b.json -o a_small.json b_small.json
//! ner-harmonize merge -i a_small.json b_small.json -o joined.json
//! ```

use std::process::ExitCode;

use clap::Parser;

use legalner::cli::commands::{config, map, merge, reduce, run, stats};
use legalner::cli::{color, Commands, HarmonizeCli, LogArgs};

fn main() -> ExitCode {
    let cli = HarmonizeCli::parse();

    if let Err(e) = cli.log.setup_logging(LogArgs::DEFAULT_LEVEL) {
        eprintln!("{} {}", color("31", "error:"), e);
        return ExitCode::FAILURE;
    }
    let quiet = cli.log.quiet;

    let result = match cli.command {
        Commands::Run(args) => run::run(args, quiet),
        Commands::Map(args) => map::run(args, quiet),
        Commands::Reduce(args) => reduce::run(args, quiet),
        Commands::Merge(args) => merge::run(args, quiet),
        Commands::Stats(args) => stats::run(args),
        Commands::DefaultConfig => config::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
