//! Collection statistics.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::AnnotatedDocument;

/// Document, span and label counts for a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of documents.
    pub documents: usize,
    /// Number of labeled results.
    pub spans: usize,
    /// Label occurrences.
    pub labels: BTreeMap<String, usize>,
}

impl DatasetStats {
    /// Count over `docs`.
    #[must_use]
    pub fn collect(docs: &[AnnotatedDocument]) -> Self {
        let mut stats = Self {
            documents: docs.len(),
            ..Self::default()
        };
        for doc in docs {
            stats.spans += doc.span_count();
            for label in doc.labels() {
                *stats.labels.entry(label.to_string()).or_insert(0) += 1;
            }
        }
        stats
    }
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Documents: {}", self.documents)?;
        writeln!(f, "  Spans: {}", self.spans)?;
        writeln!(f, "  Labels:")?;
        let mut labels: Vec<_> = self.labels.iter().collect();
        labels.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (label, count) in labels {
            writeln!(f, "    {}: {}", label, count)?;
        }
        Ok(())
    }
}
