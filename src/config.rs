//! Pipeline configuration.
//!
//! A pipeline is a list of map jobs, reduce jobs and merge jobs, run in that
//! order. Configs are TOML:
//!
//! ```toml
//! seed = 42
//!
//! [[map]]
//! name = "de"
//! inputs = ["de_train.json", "de_validation.json"]
//! outputs = ["de_train_mapped.json", "de_val_mapped.json"]
//!
//! [map.labels]
//! LIT = "LEGAL"
//! PER = "PER"
//!
//! [[reduce]]
//! inputs = ["de_train_mapped.json", "en_train_mapped.json"]
//! outputs = ["de_train_reduced.json", "en_train_reduced.json"]
//!
//! [[merge]]
//! inputs = ["de_train_reduced.json", "en_train_reduced.json"]
//! output = "train_joined.json"
//! ```
//!
//! Relative paths are resolved against the directory the pipeline runs in.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::harmonize::LabelMap;
use crate::{Error, Result};

/// Full pipeline description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Seed for the reducer; `None` draws a fresh seed from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Label-mapping jobs.
    #[serde(default, rename = "map")]
    pub map_jobs: Vec<MapJob>,
    /// Down-sampling jobs.
    #[serde(default, rename = "reduce")]
    pub reduce_jobs: Vec<ReduceJob>,
    /// Concatenation jobs.
    #[serde(default, rename = "merge")]
    pub merge_jobs: Vec<MergeJob>,
}

/// Apply one label map to several files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapJob {
    /// Name used in logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Files to map.
    pub inputs: Vec<PathBuf>,
    /// Where to write each mapped file.
    pub outputs: Vec<PathBuf>,
    /// Source → target labels.
    pub labels: LabelMap,
}

/// Reduce several files to a common size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReduceJob {
    /// Files to reduce.
    pub inputs: Vec<PathBuf>,
    /// Where to write each reduced file.
    pub outputs: Vec<PathBuf>,
}

/// Concatenate several files into one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeJob {
    /// Files to merge, in order.
    pub inputs: Vec<PathBuf>,
    /// Merged file.
    pub output: PathBuf,
}

impl PipelineConfig {
    /// Parse a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(format!("failed to serialize: {}", e)))
    }

    /// Check that every job has inputs and matching output counts.
    pub fn validate(&self) -> Result<()> {
        for (i, job) in self.map_jobs.iter().enumerate() {
            check_pairs("map", i, job.inputs.len(), job.outputs.len())?;
            if job.labels.is_empty() {
                return Err(Error::config(format!("map job {} has an empty label map", i)));
            }
        }
        for (i, job) in self.reduce_jobs.iter().enumerate() {
            check_pairs("reduce", i, job.inputs.len(), job.outputs.len())?;
        }
        for (i, job) in self.merge_jobs.iter().enumerate() {
            if job.inputs.is_empty() {
                return Err(Error::config(format!("merge job {} has no inputs", i)));
            }
        }
        Ok(())
    }

    /// The German / English / Spanish legal NER setup: map each language's
    /// train and validation files to the shared label set, reduce each split
    /// to the smallest language, then join the languages per split.
    #[must_use]
    pub fn multilingual() -> Self {
        let paths = |names: &[&str]| names.iter().map(PathBuf::from).collect::<Vec<_>>();

        let map_jobs = vec![
            MapJob {
                name: Some("de".to_string()),
                inputs: paths(&["de_train.json", "de_validation.json"]),
                outputs: paths(&["de_train_mapped.json", "de_val_mapped.json"]),
                labels: german_labels(),
            },
            MapJob {
                name: Some("en".to_string()),
                inputs: paths(&["en_train.json", "en_val.json"]),
                outputs: paths(&["en_train_mapped.json", "en_val_mapped.json"]),
                labels: english_labels(),
            },
            MapJob {
                name: Some("es".to_string()),
                inputs: paths(&["es_train.json", "es_val.json"]),
                outputs: paths(&["es_train_mapped.json", "es_val_mapped.json"]),
                labels: spanish_labels(),
            },
        ];

        let reduce_jobs = vec![
            ReduceJob {
                inputs: paths(&["de_train_mapped.json", "en_train_mapped.json", "es_train_mapped.json"]),
                outputs: paths(&["de_train_reduced.json", "en_train_reduced.json", "es_train_reduced.json"]),
            },
            ReduceJob {
                inputs: paths(&["de_val_mapped.json", "en_val_mapped.json", "es_val_mapped.json"]),
                outputs: paths(&["de_val_reduced.json", "en_val_reduced.json", "es_val_reduced.json"]),
            },
        ];

        let merge_jobs = vec![
            MergeJob {
                inputs: paths(&["de_train_reduced.json", "en_train_reduced.json", "es_train_reduced.json"]),
                output: PathBuf::from("train_joined.json"),
            },
            MergeJob {
                inputs: paths(&["de_val_reduced.json", "en_val_reduced.json", "es_val_reduced.json"]),
                output: PathBuf::from("val_joined.json"),
            },
        ];

        Self {
            seed: None,
            map_jobs,
            reduce_jobs,
            merge_jobs,
        }
    }
}

fn check_pairs(kind: &str, index: usize, inputs: usize, outputs: usize) -> Result<()> {
    if inputs == 0 {
        return Err(Error::config(format!("{} job {} has no inputs", kind, index)));
    }
    if inputs != outputs {
        return Err(Error::config(format!(
            "{} job {} has {} inputs but {} outputs",
            kind, index, inputs, outputs
        )));
    }
    Ok(())
}

/// German LER coarse types → shared labels.
#[must_use]
pub fn german_labels() -> LabelMap {
    [
        ("LIT", "LEGAL"),
        ("LOC", "LOC"),
        ("NRM", "LEGAL"),
        ("ORG", "ORG"),
        ("PER", "PER"),
        ("REG", "LEGAL"),
        ("RS", "LEGAL"),
    ]
    .into_iter()
    .collect()
}

/// Indian legal NER types → shared labels.
#[must_use]
pub fn english_labels() -> LabelMap {
    [
        ("COURT", "LEGAL"),
        ("PETITIONER", "PER"),
        ("RESPONDENT", "PER"),
        ("JUDGE", "PER"),
        ("DATE", "TIME"),
        ("ORG", "ORG"),
        ("GPE", "LOC"),
        ("STATUTE", "LEGAL"),
        ("PROVISION", "LEGAL"),
        ("PRECEDENT", "LEGAL"),
        ("CASE_NUMBER", "LEGAL"),
        ("WITNESS", "PER"),
        ("OTHER_PERSON", "PER"),
        ("LAWYER", "PER"),
    ]
    .into_iter()
    .collect()
}

/// Spanish legal NER types → shared labels.
#[must_use]
pub fn spanish_labels() -> LabelMap {
    [
        ("legal", "LEGAL"),
        ("per", "PER"),
        ("org", "ORG"),
        ("loc", "LOC"),
        ("time", "TIME"),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multilingual_is_valid() {
        let config = PipelineConfig::multilingual();
        config.validate().unwrap();
        assert_eq!(config.map_jobs.len(), 3);
        assert_eq!(config.reduce_jobs.len(), 2);
        assert_eq!(config.merge_jobs[0].output, PathBuf::from("train_joined.json"));
    }

    #[test]
    fn test_toml_roundtrip_of_builtin() {
        let config = PipelineConfig::multilingual();
        let rendered = config.to_toml_string().unwrap();
        let parsed = PipelineConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_minimal() {
        let config = PipelineConfig::from_toml_str(
            r#"
seed = 7

[[merge]]
inputs = ["a.json", "b.json"]
output = "ab.json"
"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(config.map_jobs.is_empty());
        assert_eq!(config.merge_jobs[0].inputs.len(), 2);
    }

    #[test]
    fn test_parse_map_labels() {
        let config = PipelineConfig::from_toml_str(
            r#"
[[map]]
inputs = ["es_train.json"]
outputs = ["es_train_mapped.json"]

[map.labels]
per = "PER"
"#,
        )
        .unwrap();
        assert_eq!(config.map_jobs[0].labels.lookup("per").unwrap(), "PER");
    }

    #[test]
    fn test_rejects_mismatched_outputs() {
        let err = PipelineConfig::from_toml_str(
            r#"
[[reduce]]
inputs = ["a.json", "b.json"]
outputs = ["a_out.json"]
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("2 inputs but 1 outputs"), "{}", err);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = PipelineConfig::from_toml_str("sed = 1\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builtin_label_maps_cover_sources() {
        let de = german_labels();
        for label in ["LIT", "LOC", "NRM", "ORG", "PER", "REG", "RS"] {
            assert!(de.lookup(label).is_ok(), "{} missing", label);
        }
        assert_eq!(english_labels().lookup("DATE").unwrap(), "TIME");
        assert_eq!(spanish_labels().lookup("legal").unwrap(), "LEGAL");
    }
}
