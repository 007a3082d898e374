//! Label harmonization.
//!
//! Rewrites dataset-specific labels into a shared target vocabulary so that
//! datasets annotated with different schemes can be combined. Every label
//! present must have an entry: a missing one is a dataset defect and aborts
//! the whole operation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::AnnotatedDocument;
use crate::io::{read_documents, write_documents};
use crate::stats::DatasetStats;
use crate::{Error, Result};

/// Source label → target label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap(BTreeMap<String, String>);

impl LabelMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    #[must_use]
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.0.insert(from.into(), to.into());
    }

    /// Map that sends every label in `labels` to itself.
    #[must_use]
    pub fn identity<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            labels
                .into_iter()
                .map(Into::into)
                .map(|l: String| (l.clone(), l))
                .collect(),
        )
    }

    /// Target of `label`, or a [`Error::LabelMap`] if it has no entry.
    pub fn lookup(&self, label: &str) -> Result<&str> {
        self.0
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::label_map(label))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in source-label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return a copy of `docs` with every span label rewritten.
    ///
    /// Fails on the first label without an entry; `docs` is left untouched.
    pub fn apply(&self, docs: &[AnnotatedDocument]) -> Result<Vec<AnnotatedDocument>> {
        let mut mapped = docs.to_vec();
        for doc in &mut mapped {
            for result in doc.results_mut() {
                for label in &mut result.value.labels {
                    *label = self.lookup(label)?.to_string();
                }
            }
        }
        Ok(mapped)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Map every file in `inputs` with `labels` and write the result to the
/// file at the same position in `outputs`.
///
/// All inputs are mapped in memory first; nothing is written unless every
/// label of every input has an entry.
pub fn map_datasets<P: AsRef<Path>, Q: AsRef<Path>>(
    inputs: &[P],
    outputs: &[Q],
    labels: &LabelMap,
) -> Result<Vec<DatasetStats>> {
    if inputs.len() != outputs.len() {
        return Err(Error::config(format!(
            "map: {} inputs but {} outputs",
            inputs.len(),
            outputs.len()
        )));
    }

    let mut mapped = Vec::with_capacity(inputs.len());
    for input in inputs {
        let docs = read_documents(input)?;
        let docs = labels.apply(&docs).map_err(|e| e.with_dataset(input))?;
        mapped.push(docs);
    }

    let mut stats = Vec::with_capacity(outputs.len());
    for (output, docs) in outputs.iter().zip(&mapped) {
        write_documents(output, docs)?;
        let s = DatasetStats::collect(docs);
        log::info!(
            "mapped {} documents ({} spans) -> {}",
            s.documents,
            s.spans,
            output.as_ref().display()
        );
        stats.push(s);
    }
    Ok(stats)
}
