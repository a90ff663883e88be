//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! The vault file stores nonce, tag and ciphertext as separate sections,
//! so unlike a combined `nonce || ciphertext || tag` buffer the tag is
//! returned and accepted on its own.  Ciphertext length always equals
//! plaintext length.
//!
//! Tag verification is constant-time (done inside `aes-gcm`).  On a tag
//! mismatch the working buffer is wiped and no plaintext is returned.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce, Tag};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use super::keys::VaultKey;
use crate::errors::{LusakeyError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under `key` and `nonce`.
///
/// Returns the ciphertext (same length as the plaintext) and the
/// 16-byte authentication tag.  A nonce must never be reused with the
/// same key; callers get a fresh one from `generate_nonce`.
pub fn encrypt(
    key: &VaultKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key.as_bytes()[..]));

    // Encrypt in place; the buffer holds plaintext until the call returns.
    let mut buffer = Zeroizing::new(plaintext.to_vec());
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce[..]), b"", buffer.as_mut_slice())
        .map_err(|e| LusakeyError::EncryptionFailed(format!("AES-256-GCM: {e}")))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    Ok((std::mem::take(&mut *buffer), tag_bytes))
}

/// Decrypt `ciphertext` produced by `encrypt`, verifying `tag`.
///
/// The plaintext comes back in a zeroizing buffer because it holds
/// every credential in the vault.
pub fn decrypt(
    key: &VaultKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key.as_bytes()[..]));

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&nonce[..]),
            b"",
            buffer.as_mut_slice(),
            Tag::from_slice(&tag[..]),
        )
        .map_err(|_| LusakeyError::DecryptionFailed)?;

    Ok(buffer)
}

/// Generate a fresh random 12-byte nonce from the OS.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN]> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| LusakeyError::EntropyUnavailable(e.to_string()))?;
    Ok(nonce)
}
