//! Password-level sealing of a plaintext buffer into a vault blob.
//!
//! `seal` draws a fresh salt and nonce, derives the key, encrypts and
//! frames the result.  `open` reverses it.  The derived `VaultKey` is a
//! local that drops (and wipes) before either function returns, whether
//! it returns `Ok` or bails out with `?`.

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::{self, NONCE_LEN, TAG_LEN};
use crate::errors::{LusakeyError, Result};

use super::format;

/// Encrypt `plaintext` under `password` into a self-describing blob.
pub fn seal(password: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    let salt = crypto::generate_salt()?;
    let nonce = crypto::generate_nonce()?;

    let (ciphertext, tag) = {
        let key = crypto::derive_key(password, &salt)?;
        crypto::encrypt(&key, &nonce, plaintext)?
    };
    debug!(bytes = ciphertext.len(), "sealed vault payload");

    format::encode(&salt, &nonce, &tag, &ciphertext)
}

/// Decrypt a blob produced by `seal`.
///
/// Fails with `InvalidVaultFormat` for a malformed blob and
/// `DecryptionFailed` for a wrong password or any altered byte.
pub fn open(password: &str, data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let blob = format::decode(data)?;

    // Check sizes before paying for key derivation.
    let nonce: &[u8; NONCE_LEN] = blob.nonce.as_slice().try_into().map_err(|_| {
        LusakeyError::InvalidVaultFormat(format!(
            "nonce must be {NONCE_LEN} bytes, got {}",
            blob.nonce.len()
        ))
    })?;
    let tag: &[u8; TAG_LEN] = blob.tag.as_slice().try_into().map_err(|_| {
        LusakeyError::InvalidVaultFormat(format!(
            "tag must be {TAG_LEN} bytes, got {}",
            blob.tag.len()
        ))
    })?;

    let key = crypto::derive_key(password, &blob.salt)?;
    crypto::decrypt(&key, nonce, &blob.ciphertext, tag)
}
