//! Error types for legalner.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for legalner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for legalner operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Token/tag sequences disagree, or a tag index is outside the vocabulary.
    #[error("Input shape error: {0}")]
    InputShape(String),

    /// A span label has no entry in the label map.
    #[error("Label map has no entry for label {label:?}{}", in_file(path.as_deref()))]
    LabelMap {
        /// The label that could not be mapped.
        label: String,
        /// Dataset the label was found in, when known.
        path: Option<PathBuf>,
    },

    /// A tag vocabulary contains a label that is neither `O` nor `B-`/`I-`.
    #[error("Invalid tag vocabulary: {0}")]
    Vocabulary(String),

    /// File could not be opened, read or written.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File the operation was performed on.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// File content is not the expected JSON.
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        /// File (optionally suffixed with a line number) that failed to parse.
        path: PathBuf,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Pipeline configuration is malformed or inconsistent.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create an input shape error.
    pub fn input_shape(msg: impl Into<String>) -> Self {
        Error::InputShape(msg.into())
    }

    /// Create a label map error.
    pub fn label_map(label: impl Into<String>) -> Self {
        Error::LabelMap {
            label: label.into(),
            path: None,
        }
    }

    /// Attach the dataset path to a label map error; other errors pass through.
    #[must_use]
    pub fn with_dataset(self, dataset: impl AsRef<Path>) -> Self {
        match self {
            Error::LabelMap { label, path: None } => Error::LabelMap {
                label,
                path: Some(dataset.as_ref().to_path_buf()),
            },
            other => other,
        }
    }

    /// Create a vocabulary error.
    pub fn vocabulary(msg: impl Into<String>) -> Self {
        Error::Vocabulary(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON error with the path it happened on.
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

fn in_file(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
