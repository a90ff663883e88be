//! `lusakey remove` — delete an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{entry_index, open_store, unlock, Cli};
use crate::errors::{LusakeyError, Result};

/// Execute the `remove` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let index = entry_index(number)?;
    let (_, store) = open_store(cli)?;
    let (master, mut vault) = unlock(&store)?;

    let title = vault.get(index)?.title.clone();

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove entry #{number} '{title}'?"))
            .default(false)
            .interact()
            .map_err(|e| LusakeyError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    vault.remove(index)?;
    store.save(&master, &vault)?;

    output::success(&format!("Removed entry '{title}' ({} left)", vault.len()));

    Ok(())
}
