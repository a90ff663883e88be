//! `lusakey init` — create a new, empty vault.

use crate::cli::output;
use crate::cli::{open_store, prompt_new_password, Cli};
use crate::errors::{LusakeyError, Result};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, store) = open_store(cli)?;

    // Check before prompting so the user does not type a password for nothing.
    if store.exists() {
        output::tip("Use `lusakey add` to add entries to the existing vault.");
        return Err(LusakeyError::VaultAlreadyExists(store.path().to_path_buf()));
    }

    let password = prompt_new_password(None)?;
    store.create(&password)?;

    output::success(&format!("Created vault at {}", store.path().display()));
    output::tip("Add your first entry: lusakey add --title <TITLE>");

    Ok(())
}
