//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` ties the entry codec, the envelope and the file on disk
//! together.  It holds nothing but the path: every `save` and `load` is
//! an independent, complete transformation.
//!
//! Failures are coarse at this boundary.  Whatever goes
//! wrong inside `load` (missing file, bad format, wrong password) comes
//! back as `UnlockFailed`, and `save` failures come back as `SaveFailed`.
//! The underlying cause is only emitted as a debug log event.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{LusakeyError, Result};

use super::codec;
use super::entry::Vault;
use super::envelope;

/// Handle to the single vault file.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if a vault file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    // ------------------------------------------------------------------
    // Core operations
    // ------------------------------------------------------------------

    /// Encrypt `vault` under `password` and replace the vault file.
    ///
    /// A fresh salt and nonce are drawn on every call.
    pub fn save(&self, password: &str, vault: &Vault) -> Result<()> {
        self.try_save(password, vault).map_err(|e| {
            debug!(path = %self.path.display(), error = %e, "vault save failed");
            LusakeyError::SaveFailed
        })
    }

    /// Read and decrypt the vault file.
    ///
    /// Returns either the complete vault or `UnlockFailed`.
    pub fn load(&self, password: &str) -> Result<Vault> {
        self.try_load(password).map_err(|e| {
            debug!(path = %self.path.display(), error = %e, "vault unlock failed");
            LusakeyError::UnlockFailed
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle helpers
    // ------------------------------------------------------------------

    /// Create a new, empty vault file.
    ///
    /// Refuses to touch an existing file, so a mistyped password can
    /// never replace a real vault with an empty one.
    pub fn create(&self, password: &str) -> Result<Vault> {
        if self.exists() {
            return Err(LusakeyError::VaultAlreadyExists(self.path.clone()));
        }
        let vault = Vault::new();
        self.save(password, &vault)?;
        Ok(vault)
    }

    /// Re-encrypt the vault under a new master password.
    pub fn change_password(&self, old_password: &str, new_password: &str) -> Result<Vault> {
        let vault = self.load(old_password)?;
        self.save(new_password, &vault)?;
        info!(entries = vault.len(), "master password changed");
        Ok(vault)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn try_save(&self, password: &str, vault: &Vault) -> Result<()> {
        let plaintext = codec::serialize(vault.entries());
        let blob = envelope::seal(password, &plaintext)?;
        write_atomic(&self.path, &blob)?;
        info!(entries = vault.len(), path = %self.path.display(), "vault saved");
        Ok(())
    }

    fn try_load(&self, password: &str) -> Result<Vault> {
        if !self.exists() {
            return Err(LusakeyError::VaultNotFound(self.path.clone()));
        }
        let data = fs::read(&self.path)?;
        let plaintext = envelope::open(password, &data)?;
        let entries = codec::deserialize(&plaintext);
        info!(entries = entries.len(), "vault unlocked");
        Ok(Vault::from_entries(entries))
    }
}

/// Write `data` to `path` **atomically**.
///
/// 1. Write to a temp file in the same directory and flush it to disk.
/// 2. Rename the temp file over the target path.
///
/// The rename ensures readers never see a half-written vault.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    write_temp(&tmp_path, |file| file.write_all(data))?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}

/// Create `tmp_path` owner-only, let `fill` write it, and flush to disk.
///
/// Any failure removes the temp file so no partial ciphertext is left
/// next to the vault.
fn write_temp(tmp_path: &Path, fill: impl FnOnce(&mut fs::File) -> io::Result<()>) -> io::Result<()> {
    let result = (|| -> io::Result<()> {
        let mut file = fs::File::create(tmp_path)?;
        // On Unix, restrict permissions to owner-only read/write.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        fill(&mut file)?;
        file.sync_all()
    })();

    if result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    result
}
