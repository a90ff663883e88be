//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! 120 000 iterations keep an interactive unlock well under a second
//! while making offline guessing expensive.  The iteration count is not
//! stored in the vault file, so it is fixed for format version 1.
//!
//! The master password is fed to PBKDF2 as UTF-16LE bytes.  Vault files
//! in the `LSK1` format were written that way, so changing the encoding
//! would lock users out of existing vaults.

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::keys::VaultKey;
use crate::errors::{LusakeyError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// PBKDF2 iteration count for format version 1.
pub const ITERATIONS: u32 = 120_000;

/// Derive the vault key from a master password and salt.
///
/// The same password + salt always produce the same key.  Any password
/// text is accepted, including the empty string.
pub fn derive_key(password: &str, salt: &[u8]) -> Result<VaultKey> {
    let encoded = encode_password(password);
    derive_key_with_rounds(&encoded, salt, ITERATIONS)
}

/// Run PBKDF2-HMAC-SHA256 over raw password bytes.
///
/// The key is written straight into a `VaultKey`, so a failure drops
/// (and wipes) the partially written buffer.
pub(crate) fn derive_key_with_rounds(password: &[u8], salt: &[u8], rounds: u32) -> Result<VaultKey> {
    if rounds == 0 {
        return Err(LusakeyError::KeyDerivationFailed(
            "PBKDF2 rounds must be at least 1".into(),
        ));
    }

    let mut key = VaultKey::zeroed();
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, rounds, key.as_mut_bytes())
        .map_err(|e| LusakeyError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

/// Encode the password as UTF-16LE, wiped on drop.
pub fn encode_password(password: &str) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(Vec::with_capacity(password.len() * 2));
    for unit in password.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Generate a cryptographically random 16-byte salt from the OS.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| LusakeyError::EntropyUnavailable(e.to_string()))?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // Published PBKDF2-HMAC-SHA256 vectors (P = "password", S = "salt").
    #[test]
    fn matches_known_vector_one_round() {
        let key = derive_key_with_rounds(b"password", b"salt", 1).unwrap();
        assert_eq!(
            hex(key.as_bytes()),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );
    }

    #[test]
    fn matches_known_vector_two_rounds() {
        let key = derive_key_with_rounds(b"password", b"salt", 2).unwrap();
        assert_eq!(
            hex(key.as_bytes()),
            "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
        );
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let result = derive_key_with_rounds(b"password", b"salt", 0);
        assert!(matches!(
            result,
            Err(LusakeyError::KeyDerivationFailed(_))
        ));
    }

    #[test]
    fn password_is_encoded_as_utf16le() {
        assert_eq!(encode_password("ab").as_slice(), &[0x61, 0x00, 0x62, 0x00]);
        // U+1F511 (key emoji) needs a surrogate pair.
        assert_eq!(
            encode_password("\u{1F511}").as_slice(),
            &[0x3D, 0xD8, 0x11, 0xDD]
        );
        assert!(encode_password("").is_empty());
    }

    #[test]
    fn salts_are_random() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();
        assert_eq!(a.len(), SALT_LEN);
        assert_ne!(a, b);
    }
}
