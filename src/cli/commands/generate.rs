//! `lusakey generate` — print a random password.  No vault is opened.

use crate::cli::output;
use crate::cli::copy_to_clipboard;
use crate::config::Settings;
use crate::errors::Result;
use crate::generator::{self, GeneratorOptions};

/// Command-line overrides for the configured generator defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub length: Option<usize>,
    pub no_lowercase: bool,
    pub no_uppercase: bool,
    pub no_digits: bool,
    pub symbols: bool,
}

impl Overrides {
    fn apply(self, mut opts: GeneratorOptions) -> GeneratorOptions {
        if let Some(length) = self.length {
            opts.length = length;
        }
        opts.lowercase &= !self.no_lowercase;
        opts.uppercase &= !self.no_uppercase;
        opts.digits &= !self.no_digits;
        opts.symbols |= self.symbols;
        opts
    }
}

/// Execute the `generate` command.
pub fn execute(overrides: Overrides, copy: bool) -> Result<()> {
    let settings = Settings::load_default()?;
    let opts = overrides.apply(settings.generator_options());

    let password = generator::generate(&opts);

    if copy {
        copy_to_clipboard(&password)?;
        output::success(&format!("Copied a {}-character password to the clipboard", opts.length));
    } else {
        println!("{}", password.as_str());
    }

    Ok(())
}
