//! `lusakey categories` — list the categories in use.

use crate::cli::output;
use crate::cli::{open_store, unlock, Cli};
use crate::errors::Result;

/// Execute the `categories` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let (_password, vault) = unlock(&store)?;

    let categories = vault.categories();
    if categories.is_empty() {
        output::info("No categories yet.");
        return Ok(());
    }
    for category in categories {
        println!("{category}");
    }

    Ok(())
}
