use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in LusaKey.
#[derive(Debug, Error)]
pub enum LusakeyError {
    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong password or corrupted data")]
    DecryptionFailed,

    // --- Vault errors ---
    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("Unable to unlock vault — incorrect password or unreadable vault file")]
    UnlockFailed,

    #[error("Unable to save vault")]
    SaveFailed,

    #[error("Vault not found at {}", .0.display())]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {}", .0.display())]
    VaultAlreadyExists(PathBuf),

    /// Holds the zero-based index; displayed 1-based like `list` output.
    #[error("Entry #{} not found", .0 + 1)]
    EntryNotFound(usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Interchange errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Import error: {0}")]
    ImportError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Convenience type alias for LusaKey results.
pub type Result<T> = std::result::Result<T, LusakeyError>;
