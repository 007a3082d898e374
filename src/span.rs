//! Tag-run span extraction.
//!
//! Converts a [`TaggedRecord`] into character-offset spans over the
//! single-space-joined token text.
//!
//! # Runs, not BIO chunks
//!
//! Spans are cut at every change of tag *index*, not at `B-` boundaries:
//! `B-PER I-PER` becomes two spans (`B-PER` and `I-PER` are different
//! indices), while two consecutive `B-PER` tokens become one. This matches
//! how the German LER conversion has always been produced, and keeps the
//! output aligned with the datasets it is merged with.
//!
//! # Offsets
//!
//! ```text
//! tokens:  Der  Bundestag  tagt
//! text:    "Der Bundestag tagt"
//!           0   4        13
//!               ^start    ^end (exclusive)
//! ```
//!
//! `start = Σ len(tokens[..f]) + f` and `end = Σ len(tokens[..t]) + t - 1`:
//! the `- 1` drops the separator after the last token, leaving `end` one past
//! the span's last character, as Label Studio expects. Lengths are counted in
//! characters (Unicode scalar values), not bytes.
//!
//! ```rust
//! use legalner::span::extract_spans;
//! use legalner::tags::TagVocabulary;
//! use legalner::TaggedRecord;
//!
//! let vocab = TagVocabulary::new(["O", "B-ORG"]).unwrap();
//! let record = TaggedRecord::new(["Der", "Bundestag", "tagt"], vec![0, 1, 0]);
//! let spans = extract_spans(&record, &vocab).unwrap();
//!
//! assert_eq!(spans.len(), 1);
//! assert_eq!((spans[0].start, spans[0].end), (4, 13));
//! assert_eq!(spans[0].text, "Bundestag");
//! assert_eq!(spans[0].label, "ORG");
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::TaggedRecord;
use crate::tags::TagVocabulary;
use crate::Result;

/// A labeled character range in a document's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Unique span id.
    pub id: Uuid,
    /// First character of the span.
    pub start: usize,
    /// One past the last character of the span.
    pub end: usize,
    /// The covered text.
    pub text: String,
    /// Entity type, BIO prefix stripped.
    pub label: String,
}

impl Span {
    /// Number of characters covered.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Partition a tag sequence into maximal runs of equal values.
///
/// The last run always closes the sequence, even if it has length 1.
/// An empty sequence has no runs.
#[must_use]
pub fn contiguous_runs<T: PartialEq>(tags: &[T]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    if tags.is_empty() {
        return runs;
    }

    let mut start = 0;
    for i in 1..tags.len() {
        if tags[i] != tags[start] {
            runs.push(start..i);
            start = i;
        }
    }
    runs.push(start..tags.len());
    runs
}

/// Extract spans for every non-`O` tag run of `record`.
///
/// Fails without partial output if the record's tokens and tags disagree in
/// length or if a tag index is outside `vocab`.
pub fn extract_spans(record: &TaggedRecord, vocab: &TagVocabulary) -> Result<Vec<Span>> {
    record.validate(vocab)?;

    // Character offset of each token in the joined text.
    let mut offsets = Vec::with_capacity(record.tokens.len() + 1);
    let mut current = 0;
    for token in &record.tokens {
        offsets.push(current);
        current += token.chars().count() + 1;
    }
    offsets.push(current);

    let mut spans = Vec::new();
    for run in contiguous_runs(&record.tags) {
        let tag = record.tags[run.start];
        let Some(label) = vocab.entity_type(tag) else {
            continue;
        };

        // offsets[t] counts the separator after token t-1, which is not part
        // of the span. Runs are never empty, so offsets[run.end] >= 1.
        spans.push(Span {
            id: Uuid::new_v4(),
            start: offsets[run.start],
            end: offsets[run.end] - 1,
            text: record.tokens[run.clone()].join(" "),
            label: label.to_string(),
        });
    }

    log::trace!(
        "extracted {} spans from {} tokens",
        spans.len(),
        record.tokens.len()
    );
    Ok(spans)
}
