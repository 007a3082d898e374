//! Token/tag records as supplied by the dataset provider.

use serde::{Deserialize, Serialize};

use crate::tags::TagVocabulary;
use crate::{Error, Result};

/// A tokenized sentence with one tag index per token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRecord {
    /// Tokens in sentence order.
    pub tokens: Vec<String>,
    /// Tag indices into a [`TagVocabulary`], parallel to `tokens`.
    #[serde(rename = "ner_coarse_tags")]
    pub tags: Vec<usize>,
}

impl TaggedRecord {
    /// Create a record from tokens and tag indices.
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>, tags: Vec<usize>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            tags,
        }
    }

    /// Build a record from tag labels instead of indices.
    ///
    /// Each label is looked up in `vocab`; unknown labels are an input error.
    pub fn from_labels<S: AsRef<str>>(
        tokens: &[S],
        labels: &[S],
        vocab: &TagVocabulary,
    ) -> Result<Self> {
        let tags = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                vocab.iter().position(|l| l == label).ok_or_else(|| {
                    Error::input_shape(format!("tag {:?} is not in the vocabulary", label))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(tokens.iter().map(|t| t.as_ref()), tags))
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the record has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by a single ASCII space.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Check that tokens and tags line up and every tag decodes.
    pub fn validate(&self, vocab: &TagVocabulary) -> Result<()> {
        if self.tokens.len() != self.tags.len() {
            return Err(Error::input_shape(format!(
                "Token count ({}) != tag count ({})",
                self.tokens.len(),
                self.tags.len()
            )));
        }
        if let Some((pos, &tag)) = self
            .tags
            .iter()
            .enumerate()
            .find(|&(_, &tag)| tag >= vocab.len())
        {
            return Err(Error::input_shape(format!(
                "tag index {} at token {} is outside the vocabulary (size {})",
                tag,
                pos,
                vocab.len()
            )));
        }
        Ok(())
    }
}
