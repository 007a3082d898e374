//! Map command - rename span labels

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use super::super::output::{format_error, log_success};
use super::super::parser::PresetArg;
use crate::harmonize::{map_datasets, LabelMap};

/// Rename span labels through a label map
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// Label map file: a JSON object or a TOML table of `source = "target"`
    #[arg(short, long, value_name = "FILE", required_unless_present = "preset")]
    pub labels: Option<PathBuf>,

    /// Built-in label map
    #[arg(long, value_enum, conflicts_with = "labels")]
    pub preset: Option<PresetArg>,

    /// Input files
    #[arg(short, long = "input", value_name = "FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output files, one per input
    #[arg(short, long = "output", value_name = "FILE", required = true, num_args = 1..)]
    pub outputs: Vec<PathBuf>,
}

pub fn run(args: MapArgs, quiet: bool) -> Result<(), String> {
    let labels = match (&args.labels, args.preset) {
        (Some(path), _) => load_label_map(path)?,
        (None, Some(preset)) => preset.label_map(),
        (None, None) => return Err("either --labels or --preset is required".to_string()),
    };

    let stats = map_datasets(&args.inputs, &args.outputs, &labels)
        .map_err(|e| format_error("map labels", &e.to_string()))?;

    for (output, s) in args.outputs.iter().zip(&stats) {
        log_success(
            &format!("{} documents, {} spans -> {}", s.documents, s.spans, output.display()),
            quiet,
        );
    }
    Ok(())
}

/// Read a label map, as TOML when the extension says so and JSON otherwise.
fn load_label_map(path: &Path) -> Result<LabelMap, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format_error(&format!("read {}", path.display()), &e.to_string()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let labels: LabelMap = if is_toml {
        toml::from_str(&content).map_err(|e| format_error("parse label map", &e.to_string()))?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| format_error("parse label map", &e.to_string()))?
    };

    if labels.is_empty() {
        return Err(format!("{}: label map is empty", path.display()));
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_and_toml_maps() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("labels.json");
        let toml = dir.path().join("labels.toml");
        fs::write(&json, r#"{"per": "PER", "legal": "LEGAL"}"#).unwrap();
        fs::write(&toml, "per = \"PER\"\nlegal = \"LEGAL\"\n").unwrap();

        let from_json = load_label_map(&json).unwrap();
        let from_toml = load_label_map(&toml).unwrap();
        assert_eq!(from_json, from_toml);
        assert_eq!(from_json.lookup("legal").unwrap(), "LEGAL");
    }

    #[test]
    fn test_empty_map_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        fs::write(&path, "{}").unwrap();
        assert!(load_label_map(&path).unwrap_err().contains("empty"));
    }
}
