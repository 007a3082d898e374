//! CLI modules shared by the `ler-cast` and `ner-harmonize` binaries.
//!
//! Argument structures and command implementations live here so they can be
//! tested without spawning a process.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod output;
pub mod parser;

pub use logging::LogArgs;
pub use output::*;
pub use parser::*;
