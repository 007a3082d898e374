//! BIO tag vocabularies.
//!
//! Datasets distributed through Hugging Face store NER tags as integer
//! indices into a class-label list. A [`TagVocabulary`] is that list: the
//! position of each label must match the index encoding of the source
//! dataset exactly.
//!
//! ```rust
//! use legalner::tags::TagVocabulary;
//!
//! let vocab = TagVocabulary::new(["O", "B-ORG", "I-ORG"]).unwrap();
//! assert_eq!(vocab.get(1), Some("B-ORG"));
//! assert_eq!(vocab.entity_type(1), Some("ORG"));
//! assert_eq!(vocab.entity_type(0), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The label marking tokens outside any entity.
pub const OUTSIDE: &str = "O";

/// Coarse tag set of the German LER corpus (`ner_coarse_tags`), in index order.
pub const GERMAN_LER_COARSE: &[&str] = &[
    "B-LIT", "B-LOC", "B-NRM", "B-ORG", "B-PER", "B-REG", "B-RS", //
    "I-LIT", "I-LOC", "I-NRM", "I-ORG", "I-PER", "I-REG", "I-RS", //
    "O",
];

/// Fine-grained tag set of the German LER corpus (`ner_tags`), in index order.
pub const GERMAN_LER_FINE: &[&str] = &[
    "B-AN", "B-EUN", "B-GRT", "B-GS", "B-INN", "B-LD", "B-LDS", "B-LIT", "B-MRK", "B-ORG",
    "B-PER", "B-RR", "B-RS", "B-ST", "B-STR", "B-UN", "B-VO", "B-VS", "B-VT", //
    "I-AN", "I-EUN", "I-GRT", "I-GS", "I-INN", "I-LD", "I-LDS", "I-LIT", "I-MRK", "I-ORG",
    "I-PER", "I-RR", "I-RS", "I-ST", "I-STR", "I-UN", "I-VO", "I-VS", "I-VT", //
    "O",
];

/// Ordered list of BIO labels indexed by tag id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    labels: Vec<String>,
}

impl TagVocabulary {
    /// Build a vocabulary, rejecting labels that are neither `O` nor `B-X`/`I-X`.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        for (idx, label) in labels.iter().enumerate() {
            if !is_bio_label(label) {
                return Err(Error::vocabulary(format!(
                    "label {:?} at index {} is not O, B-<TYPE> or I-<TYPE>",
                    label, idx
                )));
            }
        }
        Ok(Self { labels })
    }

    /// The coarse German LER vocabulary.
    #[must_use]
    pub fn german_ler_coarse() -> Self {
        Self::from_static(GERMAN_LER_COARSE)
    }

    /// The fine-grained German LER vocabulary.
    #[must_use]
    pub fn german_ler_fine() -> Self {
        Self::from_static(GERMAN_LER_FINE)
    }

    fn from_static(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the vocabulary has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Decode a tag index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Entity type for a tag index (BIO prefix stripped), `None` for `O` or
    /// out-of-range indices.
    #[must_use]
    pub fn entity_type(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(strip_bio_prefix)
    }

    /// Whether the tag index decodes to `O`.
    #[must_use]
    pub fn is_outside(&self, index: usize) -> bool {
        self.get(index) == Some(OUTSIDE)
    }

    /// Iterate over labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Strip the two-character BIO prefix (`B-`, `I-`) from a label.
///
/// Returns `None` for `O`.
#[must_use]
pub fn strip_bio_prefix(label: &str) -> Option<&str> {
    if label == OUTSIDE {
        None
    } else {
        label.get(2..)
    }
}

fn is_bio_label(label: &str) -> bool {
    label == OUTSIDE
        || ((label.starts_with("B-") || label.starts_with("I-")) && label.len() > 2)
}

/// Which German LER tag column to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagLevel {
    /// `ner_coarse_tags`: 7 entity types, aligned with the other legal datasets.
    #[default]
    Coarse,
    /// `ner_tags`: 19 entity types.
    Fine,
}

impl TagLevel {
    /// Vocabulary matching this level.
    #[must_use]
    pub fn vocabulary(self) -> TagVocabulary {
        match self {
            TagLevel::Coarse => TagVocabulary::german_ler_coarse(),
            TagLevel::Fine => TagVocabulary::german_ler_fine(),
        }
    }

    /// Name of the record field holding the tag indices.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            TagLevel::Coarse => "ner_coarse_tags",
            TagLevel::Fine => "ner_tags",
        }
    }
}

impl fmt::Display for TagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagLevel::Coarse => write!(f, "coarse"),
            TagLevel::Fine => write!(f, "fine"),
        }
    }
}

impl FromStr for TagLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coarse" | "ner_coarse_tags" => Ok(TagLevel::Coarse),
            "fine" | "ner_tags" => Ok(TagLevel::Fine),
            _ => Err(Error::config(format!("Unknown tag level: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabularies() {
        let coarse = TagVocabulary::german_ler_coarse();
        assert_eq!(coarse.len(), 15);
        assert_eq!(coarse.get(3), Some("B-ORG"));
        assert!(coarse.is_outside(14));

        let fine = TagVocabulary::german_ler_fine();
        assert_eq!(fine.len(), 39);
        assert_eq!(fine.get(10), Some("B-PER"));
        assert_eq!(fine.get(29), Some("I-PER"));
        assert!(fine.is_outside(38));
    }

    #[test]
    fn test_builtin_vocabularies_are_valid() {
        assert!(TagVocabulary::new(GERMAN_LER_COARSE.iter().copied()).is_ok());
        assert!(TagVocabulary::new(GERMAN_LER_FINE.iter().copied()).is_ok());
    }

    #[test]
    fn test_entity_type() {
        let vocab = TagVocabulary::german_ler_coarse();
        assert_eq!(vocab.entity_type(6), Some("RS"));
        assert_eq!(vocab.entity_type(13), Some("RS"));
        assert_eq!(vocab.entity_type(14), None);
        assert_eq!(vocab.entity_type(99), None);
    }

    #[test]
    fn test_rejects_malformed_labels() {
        for bad in ["PER", "B-", "E-PER", "", "o"] {
            let result = TagVocabulary::new(["O", bad]);
            assert!(
                matches!(result, Err(Error::Vocabulary(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_strip_bio_prefix() {
        assert_eq!(strip_bio_prefix("B-PER"), Some("PER"));
        assert_eq!(strip_bio_prefix("I-CASE_NUMBER"), Some("CASE_NUMBER"));
        assert_eq!(strip_bio_prefix("O"), None);
    }

    #[test]
    fn test_tag_level_from_str() {
        assert_eq!("coarse".parse::<TagLevel>().unwrap(), TagLevel::Coarse);
        assert_eq!("FINE".parse::<TagLevel>().unwrap(), TagLevel::Fine);
        assert_eq!("ner_tags".parse::<TagLevel>().unwrap(), TagLevel::Fine);
        assert!("medium".parse::<TagLevel>().is_err());
    }
}
