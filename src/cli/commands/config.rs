//! Default-config command - print the built-in pipeline

use super::super::output::{format_error, write_stdout};
use crate::config::PipelineConfig;

pub fn run() -> Result<(), String> {
    let rendered = PipelineConfig::multilingual()
        .to_toml_string()
        .map_err(|e| format_error("render config", &e.to_string()))?;
    write_stdout(&rendered)
}
