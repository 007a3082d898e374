//! Label Studio task documents.
//!
//! The persisted format is a JSON array of tasks, each carrying the text and
//! one annotation whose `result` list holds the labeled spans:
//!
//! ```json
//! [{ "id": "…",
//!    "data": { "text": "Der Bundestag tagt" },
//!    "annotations": [{ "result": [
//!       { "value": {"start": 4, "end": 13, "text": "Bundestag", "labels": ["ORG"]},
//!         "id": "…", "from_name": "label", "to_name": "text", "type": "labels" }
//!    ]}]
//! }]
//! ```
//!
//! Datasets produced by other tools are read through the same types. Fields
//! this crate does not model are kept in `extra` maps and written back
//! unchanged, so harmonizing a foreign file only touches its labels.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::span::Span;

/// Name of the labeling control in the Label Studio config.
pub const FROM_NAME: &str = "label";
/// Name of the text object in the Label Studio config.
pub const TO_NAME: &str = "text";
/// Result type for span labels.
pub const RESULT_TYPE: &str = "labels";

/// Task or result id. Label Studio exports use integers, our own output uses UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// String id (UUID for documents produced by this crate).
    Text(String),
    /// Numeric id.
    Number(u64),
}

impl RecordId {
    /// A fresh random UUID v4 id.
    #[must_use]
    pub fn fresh() -> Self {
        RecordId::Text(Uuid::new_v4().to_string())
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => write!(f, "{}", s),
            RecordId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One labeling task: a text and its span annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Task id. Label Studio import files may leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Task payload.
    pub data: DocumentData,
    /// Annotation sets; documents built here always have exactly one.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Unmodelled task fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Task payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    /// Document text.
    pub text: String,
    /// Unmodelled payload fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A set of labeled results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Labeled spans.
    #[serde(default)]
    pub result: Vec<AnnotationResult>,
    /// Unmodelled annotation fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single labeled span in Label Studio's result shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationResult {
    /// Offsets, text and labels.
    pub value: SpanValue,
    /// Result id.
    pub id: RecordId,
    /// Control name (`label`).
    pub from_name: String,
    /// Object name (`text`).
    pub to_name: String,
    /// Result type (`labels`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Unmodelled result fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Character range, covered text and labels of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanValue {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
    /// Covered text.
    pub text: String,
    /// Entity labels.
    pub labels: Vec<String>,
    /// Unmodelled value fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Span> for AnnotationResult {
    fn from(span: Span) -> Self {
        Self {
            value: SpanValue {
                start: span.start,
                end: span.end,
                text: span.text,
                labels: vec![span.label],
                extra: Map::new(),
            },
            id: span.id.into(),
            from_name: FROM_NAME.to_string(),
            to_name: TO_NAME.to_string(),
            kind: RESULT_TYPE.to_string(),
            extra: Map::new(),
        }
    }
}

impl AnnotatedDocument {
    /// Build a document with a fresh id and a single annotation holding `spans`.
    pub fn new(text: impl Into<String>, spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            id: Some(RecordId::fresh()),
            data: DocumentData {
                text: text.into(),
                extra: Map::new(),
            },
            annotations: vec![Annotation {
                result: spans.into_iter().map(AnnotationResult::from).collect(),
                extra: Map::new(),
            }],
            extra: Map::new(),
        }
    }

    /// Document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.data.text
    }

    /// All results across all annotation sets.
    pub fn results(&self) -> impl Iterator<Item = &AnnotationResult> {
        self.annotations.iter().flat_map(|a| a.result.iter())
    }

    /// Mutable access to all results across all annotation sets.
    pub fn results_mut(&mut self) -> impl Iterator<Item = &mut AnnotationResult> {
        self.annotations.iter_mut().flat_map(|a| a.result.iter_mut())
    }

    /// Every label on every result, in document order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.results()
            .flat_map(|r| r.value.labels.iter().map(String::as_str))
    }

    /// Number of labeled results.
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.results().count()
    }
}
