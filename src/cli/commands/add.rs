//! `lusakey add` — add a new entry to the vault.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_store, unlock, Cli, EntryFields};
use crate::errors::{LusakeyError, Result};
use crate::generator;
use crate::vault::Entry;

/// Execute the `add` command.
pub fn execute(cli: &Cli, fields: &EntryFields, generate: bool) -> Result<()> {
    let (settings, store) = open_store(cli)?;
    let (master, mut vault) = unlock(&store)?;

    let title = match &fields.title {
        Some(t) => t.clone(),
        None => dialoguer::Input::<String>::new()
            .with_prompt("Title")
            .interact_text()
            .map_err(|e| LusakeyError::CommandFailed(format!("input prompt: {e}")))?,
    };

    let password = if generate {
        generator::generate(&settings.generator_options())
    } else {
        read_entry_password(&title)?
    };

    let entry = Entry {
        title,
        category: fields.category.clone().unwrap_or_default(),
        username: fields.username.clone().unwrap_or_default(),
        password: password.to_string(),
        url: fields.url.clone().unwrap_or_default(),
        notes: fields.notes.clone().unwrap_or_default(),
    };
    let number = vault.push(entry) + 1;

    store.save(&master, &vault)?;

    output::success(&format!(
        "Added entry #{number} ({} total)",
        vault.len()
    ));
    if generate {
        output::tip(&format!("Copy the generated password: lusakey show {number} --copy"));
    }

    Ok(())
}

/// Read an entry password from a pipe or an interactive prompt.
pub(crate) fn read_entry_password(title: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        // Piped input (stdin is not a terminal).
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']).to_string();
        return Ok(Zeroizing::new(trimmed));
    }

    let pw = dialoguer::Password::new()
        .with_prompt(format!("Password for {title}"))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| LusakeyError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
