//! `lusakey passwd` — re-encrypt the vault under a new master password.

use crate::cli::output;
use crate::cli::{open_store, prompt_new_password, prompt_password, Cli};
use crate::errors::{LusakeyError, Result};

/// Environment variable holding the new password for scripted use.
const NEW_PASSWORD_ENV: &str = "LUSAKEY_NEW_PASSWORD";

/// Execute the `passwd` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, store) = open_store(cli)?;

    if !store.exists() {
        output::tip("No vault found. Run `lusakey init` to create one.");
        return Err(LusakeyError::VaultNotFound(store.path().to_path_buf()));
    }

    let old = prompt_password("Current master password")?;
    let new = prompt_new_password(Some(NEW_PASSWORD_ENV))?;

    let vault = store.change_password(&old, &new)?;

    output::success(&format!(
        "Master password changed ({} entries re-encrypted)",
        vault.len()
    ));

    Ok(())
}
