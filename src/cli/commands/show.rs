//! `lusakey show` — print one entry, optionally copying its password
//! and opening its URL.  `--copy --open` together is the quick way to
//! log in: paste the password into the page that opens.

use crate::cli::output;
use crate::cli::{copy_to_clipboard, entry_index, open_store, open_url, unlock, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, number: usize, reveal: bool, copy: bool, open: bool) -> Result<()> {
    let index = entry_index(number)?;
    let (_, store) = open_store(cli)?;
    let (_password, vault) = unlock(&store)?;

    let entry = vault.get(index)?;
    output::print_entry(number, entry, reveal);

    if copy {
        if entry.password.is_empty() {
            output::warning("Entry has no password; clipboard left unchanged.");
        } else {
            copy_to_clipboard(&entry.password)?;
            output::success("Password copied to clipboard.");
        }
    }

    if open {
        if entry.url.is_empty() {
            output::warning("Entry has no URL to open.");
        } else {
            open_url(&entry.url)?;
            output::info(&format!("Opened {}", entry.url));
        }
    }

    Ok(())
}
