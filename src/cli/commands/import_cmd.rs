//! `lusakey import` — append entries from a CSV or JSON file.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_store, unlock, Cli};
use crate::errors::{LusakeyError, Result};
use crate::interchange::{self, Format};

/// Execute the `import` command.
pub fn execute(cli: &Cli, file: &Path, format: Option<&str>) -> Result<()> {
    if !file.exists() {
        return Err(LusakeyError::CommandFailed(format!(
            "import file not found: {}",
            file.display()
        )));
    }

    // Detect format from flag or file extension.
    let format = match format {
        Some(name) => Format::parse(name)?,
        None => Format::detect(file),
    };

    // Parse before unlocking so a bad file never costs a key derivation.
    let content = fs::read_to_string(file)?;
    let entries = interchange::import(&content, format)?;

    if entries.is_empty() {
        output::warning("No entries found in the import file.");
        return Ok(());
    }

    let (_, store) = open_store(cli)?;
    let (master, mut vault) = unlock(&store)?;

    let count = entries.len();
    for entry in &entries {
        output::info(&format!("  + {}", entry.title));
    }
    vault.extend(entries);

    store.save(&master, &vault)?;

    output::success(&format!(
        "Imported {count} entries from {} ({} total)",
        file.display(),
        vault.len()
    ));

    Ok(())
}
