//! Reading and writing annotation files.
//!
//! Every file handle lives for exactly one read or one write and is closed
//! when it goes out of scope, on success and on error alike.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::document::AnnotatedDocument;
use crate::{Error, Result};

/// An open input file together with its path, for error reporting.
#[derive(Debug)]
pub struct OpenInput {
    path: PathBuf,
    reader: BufReader<File>,
}

impl OpenInput {
    /// Open `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// Path this input was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole file as JSON, consuming (and closing) the handle.
    pub fn parse_json<T: DeserializeOwned>(mut self) -> Result<T> {
        let mut content = String::new();
        self.reader
            .read_to_string(&mut content)
            .map_err(|e| Error::io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| Error::json(&self.path, e))
    }
}

/// Open every path, in order.
///
/// If any open fails, the handles opened so far are dropped (closed) before
/// the error is returned; closing never replaces the open error.
pub fn open_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<OpenInput>> {
    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        inputs.push(OpenInput::open(path)?);
    }
    Ok(inputs)
}

/// Read a JSON array of documents.
pub fn read_documents(path: impl AsRef<Path>) -> Result<Vec<AnnotatedDocument>> {
    let docs: Vec<AnnotatedDocument> = OpenInput::open(path.as_ref())?.parse_json()?;
    log::debug!("read {} documents from {}", docs.len(), path.as_ref().display());
    Ok(docs)
}

/// Write a JSON array of documents, creating parent directories as needed.
pub fn write_documents(path: impl AsRef<Path>, docs: &[AnnotatedDocument]) -> Result<()> {
    write_json(path.as_ref(), docs)?;
    log::debug!("wrote {} documents to {}", docs.len(), path.as_ref().display());
    Ok(())
}

/// Serialize `value` as compact JSON into `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|e| {
        if e.is_io() {
            Error::io(path, e.into())
        } else {
            Error::json(path, e)
        }
    })?;
    writer.flush().map_err(|e| Error::io(path, e))
}
