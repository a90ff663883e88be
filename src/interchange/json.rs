//! JSON import/export: a pretty-printed array of entry objects.

use crate::errors::{LusakeyError, Result};
use crate::vault::Entry;

/// Render entries as a JSON array.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| LusakeyError::SerializationError(format!("JSON export: {e}")))
}

/// Parse a JSON array of entry objects.  Missing fields default to empty.
pub fn from_json(content: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(content).map_err(|e| LusakeyError::ImportError(format!("invalid JSON: {e}")))
}
