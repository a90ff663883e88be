//! `lusakey completions` — print a shell completion script.
//!
//!   lusakey completions bash > ~/.local/share/bash-completion/completions/lusakey
//!   lusakey completions zsh > ~/.zfunc/_lusakey

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
