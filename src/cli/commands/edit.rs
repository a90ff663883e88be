//! `lusakey edit` — replace fields of an existing entry.
//!
//! Only the fields given on the command line change; the password is
//! replaced only with `--password` (prompt) or `--generate`.

use crate::cli::commands::add::read_entry_password;
use crate::cli::output;
use crate::cli::{entry_index, open_store, unlock, Cli, EntryFields};
use crate::errors::{LusakeyError, Result};
use crate::generator;

/// Execute the `edit` command.
pub fn execute(
    cli: &Cli,
    number: usize,
    fields: &EntryFields,
    new_password: bool,
    generate: bool,
) -> Result<()> {
    let index = entry_index(number)?;
    let (settings, store) = open_store(cli)?;
    let (master, mut vault) = unlock(&store)?;

    let mut entry = vault.get(index)?.clone();
    let mut changed = apply_fields(&mut entry, fields);

    if generate {
        entry.password = generator::generate(&settings.generator_options()).to_string();
        changed = true;
    } else if new_password {
        entry.password = read_entry_password(&entry.title)?.to_string();
        changed = true;
    }

    if !changed {
        return Err(LusakeyError::CommandFailed(
            "nothing to change — pass at least one field flag".into(),
        ));
    }

    vault.update(index, entry)?;
    store.save(&master, &vault)?;

    output::success(&format!("Updated entry #{number}"));

    Ok(())
}

/// Copy the given flags onto `entry`.  Returns `true` if anything was set.
fn apply_fields(entry: &mut crate::vault::Entry, fields: &EntryFields) -> bool {
    let mut changed = false;
    let targets = [
        (&fields.title, &mut entry.title),
        (&fields.category, &mut entry.category),
        (&fields.username, &mut entry.username),
        (&fields.url, &mut entry.url),
        (&fields.notes, &mut entry.notes),
    ];
    for (value, target) in targets {
        if let Some(v) = value {
            *target = v.clone();
            changed = true;
        }
    }
    changed
}
