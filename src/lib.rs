//! # legalner
//!
//! Legal NER dataset preparation.
//!
//! - **Conversion**: German LER token/tag records → Label Studio span tasks
//! - **Harmonization**: rename dataset-specific labels to a shared label set
//! - **Reduction**: down-sample several datasets to the smallest one
//! - **Merging**: concatenate datasets into one training file
//!
//! ## Quick Start
//!
//! ```rust
//! use legalner::convert::record_to_document;
//! use legalner::tags::TagVocabulary;
//! use legalner::TaggedRecord;
//!
//! let vocab = TagVocabulary::german_ler_coarse();
//! // 14 = O, 3 = B-ORG
//! let record = TaggedRecord::new(["Der", "Bundestag", "tagt"], vec![14, 3, 14]);
//! let doc = record_to_document(&record, &vocab).unwrap();
//!
//! let value = &doc.annotations[0].result[0].value;
//! assert_eq!((value.start, value.end), (4, 13));
//! assert_eq!(value.labels, vec!["ORG"]);
//! ```
//!
//! ## Harmonize, reduce, merge
//!
//! ```rust,ignore
//! use legalner::config::PipelineConfig;
//! use legalner::pipeline::run_pipeline;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = PipelineConfig::load("pipeline.toml")?;
//! let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
//! let report = run_pipeline(&config, std::path::Path::new("data"), &mut rng)?;
//! ```
//!
//! ## Binaries
//!
//! | Binary | Purpose |
//! |--------|---------|
//! | `ler-cast` | Convert a German LER JSON-lines export to Label Studio JSON |
//! | `ner-harmonize` | Map, reduce and merge Label Studio datasets |

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod document;
mod error;
pub mod harmonize;
pub mod io;
pub mod merge;
pub mod pipeline;
mod record;
pub mod reduce;
pub mod source;
pub mod span;
pub mod stats;
pub mod tags;

pub use document::{AnnotatedDocument, RecordId};
pub use error::{Error, Result};
pub use harmonize::LabelMap;
pub use record::TaggedRecord;
pub use span::Span;
pub use stats::DatasetStats;
pub use tags::{TagLevel, TagVocabulary};
