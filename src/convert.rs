//! German LER → Label Studio conversion.

use std::path::{Path, PathBuf};

use crate::document::AnnotatedDocument;
use crate::io::write_documents;
use crate::record::TaggedRecord;
use crate::source::SplitSource;
use crate::span::extract_spans;
use crate::stats::DatasetStats;
use crate::tags::TagVocabulary;
use crate::{Error, Result};

/// Default prefix of converted files (`de_train.json`, …).
pub const DEFAULT_PREFIX: &str = "de";

/// Convert one record into a task document.
pub fn record_to_document(
    record: &TaggedRecord,
    vocab: &TagVocabulary,
) -> Result<AnnotatedDocument> {
    let spans = extract_spans(record, vocab)?;
    Ok(AnnotatedDocument::new(record.text(), spans))
}

/// Convert every record of a split, stopping at the first malformed one.
pub fn convert_records(
    records: &[TaggedRecord],
    vocab: &TagVocabulary,
) -> Result<Vec<AnnotatedDocument>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            record_to_document(record, vocab).map_err(|e| match e {
                Error::InputShape(msg) => Error::input_shape(format!("record {}: {}", idx, msg)),
                other => other,
            })
        })
        .collect()
}

/// Output file name for a split.
#[must_use]
pub fn output_file_name(prefix: &str, split: &str) -> String {
    format!("{}_{}.json", prefix, split)
}

/// Result of converting one split.
#[derive(Debug, Clone)]
pub struct ConvertedSplit {
    /// Split name.
    pub split: String,
    /// File the documents were written to.
    pub path: PathBuf,
    /// Counts over the written documents.
    pub stats: DatasetStats,
}

/// Convert the given splits of `source` and write `<prefix>_<split>.json`
/// files into `output_dir`.
///
/// With `splits` empty, every split the source exposes is converted. All
/// splits are converted before anything is written.
pub fn convert_dataset(
    source: &dyn SplitSource,
    vocab: &TagVocabulary,
    splits: &[String],
    output_dir: &Path,
    prefix: &str,
) -> Result<Vec<ConvertedSplit>> {
    if let Some(level) = source.tag_level() {
        if level.vocabulary() != *vocab {
            return Err(Error::vocabulary(format!(
                "{} tags ({}) need the {} vocabulary",
                level,
                level.field_name(),
                level
            )));
        }
    }

    let splits = if splits.is_empty() {
        source.split_names()?
    } else {
        splits.to_vec()
    };
    if splits.is_empty() {
        return Err(Error::config("dataset has no splits to convert"));
    }

    let mut converted = Vec::with_capacity(splits.len());
    for split in &splits {
        let records = source.load_split(split)?;
        let docs = convert_records(&records, vocab)
            .map_err(|e| with_split_context(e, split))?;
        converted.push((split.clone(), docs));
    }

    let mut written = Vec::with_capacity(converted.len());
    for (split, docs) in converted {
        let path = output_dir.join(output_file_name(prefix, &split));
        write_documents(&path, &docs)?;

        let stats = DatasetStats::collect(&docs);
        log::info!(
            "{}: {} documents, {} spans -> {}",
            split,
            stats.documents,
            stats.spans,
            path.display()
        );
        written.push(ConvertedSplit { split, path, stats });
    }
    Ok(written)
}

fn with_split_context(err: Error, split: &str) -> Error {
    match err {
        Error::InputShape(msg) => Error::input_shape(format!("split {}: {}", split, msg)),
        other => other,
    }
}
