//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{LusakeyError, Result};
use crate::vault::{Vault, VaultStore};

/// Minimum length for a newly chosen master password.
const MIN_PASSWORD_LEN: usize = 8;

/// Environment variable checked before prompting for the master password.
const PASSWORD_ENV: &str = "LUSAKEY_PASSWORD";

/// LusaKey CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "lusakey", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: <data dir>/LusaKey/vault.dat)
    #[arg(long, env = "LUSAKEY_VAULT", global = true)]
    pub vault: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Entry fields that can be given on the command line.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct EntryFields {
    /// Entry title
    #[arg(long)]
    pub title: Option<String>,

    /// Category (e.g. Work, Finance)
    #[arg(long)]
    pub category: Option<String>,

    /// Login / username
    #[arg(long)]
    pub username: Option<String>,

    /// Website URL
    #[arg(long)]
    pub url: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty vault
    Init,

    /// List entries
    List {
        /// Only show entries containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only show entries in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one entry
    Show {
        /// Entry number as shown by `list`
        index: usize,
        /// Print the password in clear text
        #[arg(long)]
        reveal: bool,
        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
        /// Open the entry's URL in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Add a new entry
    Add {
        #[command(flatten)]
        fields: EntryFields,
        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,
    },

    /// Edit an existing entry
    Edit {
        /// Entry number as shown by `list`
        index: usize,
        #[command(flatten)]
        fields: EntryFields,
        /// Prompt for a new password
        #[arg(long, conflicts_with = "generate")]
        password: bool,
        /// Replace the password with a generated one
        #[arg(short, long)]
        generate: bool,
    },

    /// Remove an entry
    Remove {
        /// Entry number as shown by `list`
        index: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List categories in use
    Categories,

    /// Import entries from a CSV or JSON file
    Import {
        /// Path to the file to import
        file: PathBuf,
        /// Import format: csv or json (auto-detected from extension)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Export entries to a CSV or JSON file (unencrypted!)
    Export {
        /// Output file path, or `-` for stdout
        file: String,
        /// Export format: csv or json (auto-detected from extension)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Generate a random password
    Generate {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Exclude digits
        #[arg(long)]
        no_digits: bool,
        /// Include symbols
        #[arg(long)]
        symbols: bool,
        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },

    /// Change the master password
    Passwd,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve settings and the vault store from the CLI arguments.
pub fn open_store(cli: &Cli) -> Result<(Settings, VaultStore)> {
    let settings = Settings::load_default()?;
    let path = settings.vault_path(cli.vault.as_deref())?;
    Ok((settings, VaultStore::new(path)))
}

/// Prompt for the master password and unlock the vault.
///
/// Any failure is reported with the same message, whatever the cause.
pub fn unlock(store: &VaultStore) -> Result<(Zeroizing<String>, Vault)> {
    if !store.exists() {
        output::tip("No vault found. Run `lusakey init` to create one.");
        return Err(LusakeyError::VaultNotFound(store.path().to_path_buf()));
    }
    let password = prompt_password("Enter master password")?;
    let vault = store.load(&password)?;
    Ok((password, vault))
}

/// Get the master password, trying in order:
/// 1. `LUSAKEY_PASSWORD` env var (scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| LusakeyError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation.
///
/// Reads `env_var` (default `LUSAKEY_PASSWORD`) first for scripted use.
/// Enforces a minimum password length.
pub fn prompt_new_password(env_var: Option<&str>) -> Result<Zeroizing<String>> {
    let from_env = std::env::var(env_var.unwrap_or(PASSWORD_ENV))
        .ok()
        .filter(|pw| !pw.is_empty());

    if let Some(pw) = from_env {
        check_password_strength(&pw)?;
        return Ok(Zeroizing::new(pw));
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation(
                "Confirm master password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| LusakeyError::CommandFailed(format!("password prompt: {e}")))?;

        if let Err(e) = check_password_strength(&password) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

fn check_password_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LusakeyError::CommandFailed(format!(
            "master password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Convert a 1-based entry number from the command line to an index.
pub fn entry_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| LusakeyError::CommandFailed("entry numbers start at 1".into()))
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LusakeyError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| LusakeyError::ClipboardError(e.to_string()))
}

/// Open `url` with the platform's default handler.
pub fn open_url(url: &str) -> Result<()> {
    open::that(url).map_err(|e| LusakeyError::CommandFailed(format!("cannot open {url}: {e}")))
}
