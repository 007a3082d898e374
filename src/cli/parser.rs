//! CLI argument parsing and structure definitions

use clap::{Parser, Subcommand, ValueEnum};

use super::commands;
use super::logging::LogArgs;
use crate::tags::TagLevel;

/// Convert the German LER corpus to Label Studio tasks
#[derive(Parser, Debug)]
#[command(name = "ler-cast")]
#[command(
    version,
    about = "Convert the German LER corpus to Label Studio tasks",
    long_about = r#"
ler-cast - German LER → Label Studio conversion

Reads one JSON-lines file per split (train.jsonl, validation.jsonl, ...)
as written by a Hugging Face `datasets` export, turns every tag run into a
labeled span and writes <prefix>_<split>.json per split.

EXAMPLES:
  ler-cast --input german-ler/ --output data/
  ler-cast --input german-ler/ --level fine --split train
"#
)]
pub struct CastCli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub args: commands::CastArgs,
}

/// Harmonize, reduce and merge NER datasets
#[derive(Parser, Debug)]
#[command(name = "ner-harmonize")]
#[command(
    version,
    about = "Harmonize, reduce and merge Label Studio NER datasets",
    long_about = r#"
ner-harmonize - multilingual NER dataset preparation

STEPS:
  map     rename labels through a label map (every label must be mapped)
  reduce  down-sample datasets to the size of the smallest one
  merge   concatenate datasets into one file
  run     all of the above, driven by a TOML pipeline config

EXAMPLES:
  ner-harmonize run --dir data/ --seed 42
  ner-harmonize run --config pipeline.toml
  ner-harmonize map --preset de -i de_train.json -o de_train_mapped.json
  ner-harmonize stats train_joined.json
"#
)]
#[command(propagate_version = true)]
pub struct HarmonizeCli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full map → reduce → merge pipeline
    Run(commands::RunArgs),

    /// Rename span labels through a label map
    Map(commands::MapArgs),

    /// Down-sample datasets to the smallest one
    Reduce(commands::ReduceArgs),

    /// Concatenate datasets
    Merge(commands::MergeArgs),

    /// Show document, span and label counts
    Stats(commands::StatsArgs),

    /// Print the built-in multilingual pipeline config
    DefaultConfig,
}

/// Tag column selection
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LevelArg {
    /// ner_coarse_tags (7 types)
    #[default]
    Coarse,
    /// ner_tags (19 types)
    Fine,
}

impl From<LevelArg> for TagLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Coarse => TagLevel::Coarse,
            LevelArg::Fine => TagLevel::Fine,
        }
    }
}

/// Built-in label maps
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PresetArg {
    /// German LER coarse types
    De,
    /// Indian legal NER types
    En,
    /// Spanish legal NER types
    Es,
}

impl PresetArg {
    pub fn label_map(self) -> crate::LabelMap {
        match self {
            PresetArg::De => crate::config::german_labels(),
            PresetArg::En => crate::config::english_labels(),
            PresetArg::Es => crate::config::spanish_labels(),
        }
    }
}
