//! Stats command - document, span and label counts

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{format_error, write_stdout};
use crate::io::read_documents;
use crate::stats::DatasetStats;

/// Show document, span and label counts of Label Studio files
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Files to inspect
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatsArgs) -> Result<(), String> {
    let mut all = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let docs = read_documents(file).map_err(|e| format_error("read dataset", &e.to_string()))?;
        all.push((file.display().to_string(), DatasetStats::collect(&docs)));
    }

    let mut out = String::new();
    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = all
            .into_iter()
            .map(|(name, stats)| serde_json::to_value(stats).map(|v| (name, v)))
            .collect::<Result<_, _>>()
            .map_err(|e| format_error("serialize stats", &e.to_string()))?;
        out.push_str(
            &serde_json::to_string_pretty(&map)
                .map_err(|e| format_error("serialize stats", &e.to_string()))?,
        );
        out.push('\n');
    } else {
        for (name, stats) in &all {
            out.push_str(&format!("{}\n{}", name, stats));
        }
    }
    write_stdout(&out)
}
