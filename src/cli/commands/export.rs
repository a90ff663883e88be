//! `lusakey export` — write entries to a plaintext CSV or JSON file.
//!
//! The output is **not** encrypted; a warning is printed for file exports.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_store, unlock, Cli};
use crate::errors::{LusakeyError, Result};
use crate::interchange::{self, Format};

/// Execute the `export` command.  `dest` of `-` writes to stdout.
pub fn execute(cli: &Cli, dest: &str, format: Option<&str>) -> Result<()> {
    let (_, store) = open_store(cli)?;

    let format = match format {
        Some(name) => Format::parse(name)?,
        None => Format::detect(Path::new(dest)),
    };

    // Safety: refuse to overwrite the vault itself.
    if dest != "-" && is_same_file(Path::new(dest), store.path()) {
        return Err(LusakeyError::CommandFailed(
            "refusing to export over the vault file".into(),
        ));
    }

    let (_password, vault) = unlock(&store)?;
    let content = interchange::export(vault.entries(), format)?;

    if dest == "-" {
        // Raw output only, so it can be piped.
        print!("{content}");
        return Ok(());
    }

    fs::write(dest, &content)
        .map_err(|e| LusakeyError::CommandFailed(format!("failed to write export file: {e}")))?;

    output::success(&format!("Exported {} entries to {dest}", vault.len()));
    output::warning("The export file is NOT encrypted. Delete it when done.");

    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_file_detection() {
        let dir = tempfile::TempDir::new().unwrap();
        let vault = dir.path().join("vault.dat");
        fs::write(&vault, b"x").unwrap();

        let dotted = dir.path().join(".").join("vault.dat");
        assert!(is_same_file(&dotted, &vault));
        assert!(!is_same_file(&dir.path().join("out.csv"), &vault));
    }
}
