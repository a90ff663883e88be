use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{LusakeyError, Result};
use crate::generator::GeneratorOptions;

/// Application directory name under the platform config/data dirs.
const APP_DIR: &str = "LusaKey";

/// Vault file name inside the data directory.
const VAULT_FILE: &str = "vault.dat";

/// User-level configuration, loaded from `lusakey.toml`.
///
/// Every field has a sensible default so LusaKey works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Explicit vault file location (default: `<data_dir>/LusaKey/vault.dat`).
    #[serde(default)]
    pub vault_file: Option<PathBuf>,

    /// Generated password length (default: 16).
    #[serde(default = "default_generator_length")]
    pub generator_length: usize,

    #[serde(default = "default_true")]
    pub generator_lowercase: bool,

    #[serde(default = "default_true")]
    pub generator_uppercase: bool,

    #[serde(default = "default_true")]
    pub generator_digits: bool,

    #[serde(default)]
    pub generator_symbols: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_generator_length() -> usize {
    16
}

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: None,
            generator_length: default_generator_length(),
            generator_lowercase: true,
            generator_uppercase: true,
            generator_digits: true,
            generator_symbols: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the config directory.
    const FILE_NAME: &'static str = "lusakey.toml";

    /// Load settings from `<config_dir>/lusakey.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            LusakeyError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Load settings from the platform config directory, e.g.
    /// `~/.config/LusaKey/lusakey.toml` on Linux.
    pub fn load_default() -> Result<Self> {
        match dirs::config_dir() {
            Some(dir) => Self::load(&dir.join(APP_DIR)),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the vault file path.
    ///
    /// Precedence: explicit override (CLI flag / env) > `vault_file` in
    /// the config > `<data_dir>/LusaKey/vault.dat`.
    pub fn vault_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.vault_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().ok_or_else(|| {
            LusakeyError::ConfigError(
                "cannot determine the user data directory — pass --vault <PATH>".into(),
            )
        })?;
        Ok(data_dir.join(APP_DIR).join(VAULT_FILE))
    }

    /// Convert the generator settings into generator options.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            length: self.generator_length,
            lowercase: self.generator_lowercase,
            uppercase: self.generator_uppercase,
            digits: self.generator_digits,
            symbols: self.generator_symbols,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
