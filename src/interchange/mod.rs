//! Plaintext interchange formats for moving entries in and out of a vault.
//!
//! These operate on an already-unlocked `Vault` and have no coupling to
//! the encryption layer.  Files written here are **not** encrypted.

pub mod csv;
pub mod json;

use std::path::Path;

use crate::errors::{LusakeyError, Result};
use crate::vault::Entry;

/// Supported interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Parse a user-supplied format name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(LusakeyError::CommandFailed(format!(
                "unknown format '{other}' — use 'csv' or 'json'"
            ))),
        }
    }

    /// Detect the format from a file extension, defaulting to CSV.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Render entries in the given format.
pub fn export(entries: &[Entry], format: Format) -> Result<String> {
    match format {
        Format::Csv => Ok(csv::to_csv(entries)),
        Format::Json => json::to_json(entries),
    }
}

/// Parse entries from text in the given format.
pub fn import(content: &str, format: Format) -> Result<Vec<Entry>> {
    match format {
        Format::Csv => csv::from_csv(content),
        Format::Json => json::from_json(content),
    }
}
