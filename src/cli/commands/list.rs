//! `lusakey list` — display entries in a table.

use crate::cli::output;
use crate::cli::{open_store, unlock, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, search: Option<&str>, category: Option<&str>) -> Result<()> {
    let (_, store) = open_store(cli)?;
    let (_password, vault) = unlock(&store)?;

    let rows = vault.search(search.unwrap_or(""), category);

    output::info(&format!("{} of {} entries", rows.len(), vault.len()));
    output::print_entries_table(&rows);

    Ok(())
}
