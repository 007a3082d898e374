//! ler-cast - German LER corpus → Label Studio tasks
//!
//! ```bash
//! ler-cast --input german-ler/ --output data/
//! ler-cast --input german-ler/ --level fine --split train --split test
//! ```

use std::process::ExitCode;

use clap::Parser;

use legalner::cli::commands::cast;
use legalner::cli::{color, CastCli, LogArgs};

fn main() -> ExitCode {
    let cli = CastCli::parse();

    if let Err(e) = cli.log.setup_logging(LogArgs::DEFAULT_LEVEL) {
        eprintln!("{} {}", color("31", "error:"), e);
        return ExitCode::FAILURE;
    }

    match cast::run(cli.args, cli.log.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
