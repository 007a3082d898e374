//! Dataset providers.
//!
//! Downloading is out of scope: a provider hands out already-tokenized,
//! already-tagged records per named split. [`JsonlSplitDir`] reads the
//! JSON-lines export the Hugging Face `datasets` library writes
//! (`dataset[split].to_json("train.jsonl")`), one record per line:
//!
//! ```json
//! {"id": "0", "tokens": ["Der", "Bundestag"], "ner_tags": [38, 9], "ner_coarse_tags": [14, 3]}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::record::TaggedRecord;
use crate::tags::TagLevel;
use crate::{Error, Result};

/// File extension of split files in a [`JsonlSplitDir`].
pub const SPLIT_EXTENSION: &str = "jsonl";

/// A source of tagged records, grouped into named splits.
pub trait SplitSource {
    /// Names of the available splits, in a stable order.
    fn split_names(&self) -> Result<Vec<String>>;

    /// Load every record of one split.
    fn load_split(&self, split: &str) -> Result<Vec<TaggedRecord>>;

    /// Tag column the records come from, when the source knows it.
    fn tag_level(&self) -> Option<TagLevel> {
        None
    }
}

/// Raw line of a Hugging Face NER export.
#[derive(Debug, Deserialize)]
struct RawRecord {
    tokens: Vec<String>,
    #[serde(default)]
    ner_tags: Option<Vec<usize>>,
    #[serde(default)]
    ner_coarse_tags: Option<Vec<usize>>,
}

impl RawRecord {
    fn into_tagged(self, level: TagLevel) -> Option<TaggedRecord> {
        let tags = match level {
            TagLevel::Coarse => self.ner_coarse_tags,
            TagLevel::Fine => self.ner_tags,
        }?;
        Some(TaggedRecord {
            tokens: self.tokens,
            tags,
        })
    }
}

/// A directory with one `<split>.jsonl` file per split.
#[derive(Debug, Clone)]
pub struct JsonlSplitDir {
    dir: PathBuf,
    level: TagLevel,
}

impl JsonlSplitDir {
    /// Read splits from `dir`, taking tags from the column matching `level`.
    pub fn new(dir: impl Into<PathBuf>, level: TagLevel) -> Self {
        Self {
            dir: dir.into(),
            level,
        }
    }

    /// Directory holding the split files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for `split`.
    #[must_use]
    pub fn split_path(&self, split: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", split, SPLIT_EXTENSION))
    }

    /// Parse the content of one split file.
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<TaggedRecord>> {
        let mut records = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let location = PathBuf::from(format!("{}:{}", path.display(), line_num + 1));
            let raw: RawRecord =
                serde_json::from_str(line).map_err(|e| Error::json(&location, e))?;
            let record = raw.into_tagged(self.level).ok_or_else(|| {
                Error::input_shape(format!(
                    "{}: record has no {} field",
                    location.display(),
                    self.level.field_name()
                ))
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl SplitSource for JsonlSplitDir {
    fn tag_level(&self) -> Option<TagLevel> {
        Some(self.level)
    }

    fn split_names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::io(&self.dir, e))?;

        let entries = entries
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io(&self.dir, e))?;

        let mut names: Vec<String> = entries
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == SPLIT_EXTENSION)
                    .unwrap_or(false)
            })
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();

        names.sort_by(|a, b| split_rank(a).cmp(&split_rank(b)).then_with(|| a.cmp(b)));
        Ok(names)
    }

    fn load_split(&self, split: &str) -> Result<Vec<TaggedRecord>> {
        let path = self.split_path(split);
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let records = self.parse(&content, &path)?;
        log::debug!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

/// Conventional splits first, everything else alphabetically after them.
fn split_rank(name: &str) -> u8 {
    match name {
        "train" => 0,
        "validation" => 1,
        "test" => 2,
        _ => 3,
    }
}

/// Splits held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    splits: BTreeMap<String, Vec<TaggedRecord>>,
}

impl InMemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a split.
    #[must_use]
    pub fn with_split(mut self, name: impl Into<String>, records: Vec<TaggedRecord>) -> Self {
        self.splits.insert(name.into(), records);
        self
    }
}

impl SplitSource for InMemorySource {
    fn split_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.splits.keys().cloned().collect();
        names.sort_by(|a, b| split_rank(a).cmp(&split_rank(b)).then_with(|| a.cmp(b)));
        Ok(names)
    }

    fn load_split(&self, split: &str) -> Result<Vec<TaggedRecord>> {
        self.splits
            .get(split)
            .cloned()
            .ok_or_else(|| Error::config(format!("Unknown split: {}", split)))
    }
}
