//! Cast command - German LER JSON lines → Label Studio JSON

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{format_error, log_success};
use super::super::parser::LevelArg;
use crate::convert::{convert_dataset, DEFAULT_PREFIX};
use crate::source::JsonlSplitDir;
use crate::tags::TagLevel;

/// Convert German LER splits to Label Studio tasks
#[derive(Parser, Debug)]
pub struct CastArgs {
    /// Directory holding one `<split>.jsonl` file per split
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Directory to write `<prefix>_<split>.json` into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// File name prefix
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Tag column to convert
    #[arg(short, long, value_enum, default_value_t = LevelArg::Coarse)]
    pub level: LevelArg,

    /// Split to convert (repeatable; default: every split found)
    #[arg(short, long = "split", value_name = "NAME")]
    pub splits: Vec<String>,
}

pub fn run(args: CastArgs, quiet: bool) -> Result<(), String> {
    let level = TagLevel::from(args.level);
    let source = JsonlSplitDir::new(&args.input, level);
    let vocab = level.vocabulary();

    let converted = convert_dataset(&source, &vocab, &args.splits, &args.output, &args.prefix)
        .map_err(|e| format_error("convert dataset", &e.to_string()))?;

    for split in &converted {
        log_success(
            &format!(
                "{}: {} documents, {} spans -> {}",
                split.split,
                split.stats.documents,
                split.stats.spans,
                split.path.display()
            ),
            quiet,
        );
    }
    Ok(())
}
