//! Binary vault file format.
//!
//! A vault file has this layout (all integers are little-endian u32):
//!
//! ```text
//! [LSK1: 4 bytes][version][salt_len][nonce_len][tag_len][ct_len][salt][nonce][tag][ciphertext]
//! ```
//!
//! - **Magic** (`LSK1`): identifies the file as a LusaKey vault.
//! - **Version**: format version (currently `1`).
//! - **Lengths**: sizes of the four variable sections that follow.
//!
//! Every section is length-prefixed so a future version can change
//! salt or nonce sizes; this codec recognizes and rejects anything it
//! does not understand instead of misparsing it.

use crate::errors::{LusakeyError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every vault file.
pub const MAGIC: &[u8; 4] = b"LSK1";

/// Current binary format version.
pub const CURRENT_VERSION: u32 = 1;

/// Fixed-size prefix: 4 (magic) + 5 * 4 (version and four lengths).
pub const HEADER_LEN: usize = 24;

// ---------------------------------------------------------------------------
// Blob
// ---------------------------------------------------------------------------

/// The parsed sections of a vault file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub version: u32,
    pub salt: Vec<u8>,
    pub nonce: Vec<u8>,
    pub tag: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Frame the sections into a version-1 vault blob.
pub fn encode(salt: &[u8], nonce: &[u8], tag: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let total = HEADER_LEN + salt.len() + nonce.len() + tag.len() + ciphertext.len();
    let mut buf = Vec::with_capacity(total);

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&CURRENT_VERSION.to_le_bytes());
    for (name, section) in [
        ("salt", salt),
        ("nonce", nonce),
        ("tag", tag),
        ("ciphertext", ciphertext),
    ] {
        let len = u32::try_from(section.len()).map_err(|_| {
            LusakeyError::InvalidVaultFormat(format!(
                "{name} length {} exceeds u32::MAX",
                section.len()
            ))
        })?;
        buf.extend_from_slice(&len.to_le_bytes());
    }

    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(tag);
    buf.extend_from_slice(ciphertext);

    Ok(buf)
}

/// Parse a vault blob back into its sections.
///
/// Fails on a short buffer, wrong magic, an unknown version, or
/// declared lengths that run past the end of the buffer.  Bytes after
/// the ciphertext are ignored.
pub fn decode(data: &[u8]) -> Result<Blob> {
    let mut reader = Reader::new(data);

    let magic = reader
        .take(MAGIC.len())
        .ok_or_else(|| invalid("file too small to be a vault"))?;
    if magic != MAGIC {
        return Err(invalid("missing LSK1 magic bytes"));
    }

    let version = reader.read_u32("version")?;
    let salt_len = reader.read_len("salt length")?;
    let nonce_len = reader.read_len("nonce length")?;
    let tag_len = reader.read_len("tag length")?;
    let ct_len = reader.read_len("ciphertext length")?;

    if version != CURRENT_VERSION {
        return Err(LusakeyError::InvalidVaultFormat(format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let body_len = salt_len
        .checked_add(nonce_len)
        .and_then(|n| n.checked_add(tag_len))
        .and_then(|n| n.checked_add(ct_len))
        .ok_or_else(|| invalid("section lengths overflow"))?;
    if body_len > reader.remaining() {
        return Err(invalid("section lengths exceed file size"));
    }

    // The length check above guarantees these reads succeed.
    let salt = reader.take(salt_len).unwrap_or_default().to_vec();
    let nonce = reader.take(nonce_len).unwrap_or_default().to_vec();
    let tag = reader.take(tag_len).unwrap_or_default().to_vec();
    let ciphertext = reader.take(ct_len).unwrap_or_default().to_vec();

    Ok(Blob {
        version,
        salt,
        nonce,
        tag,
        ciphertext,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid(msg: &str) -> LusakeyError {
    LusakeyError::InvalidVaultFormat(msg.to_string())
}

/// Bounds-checked cursor over the raw file bytes.
struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        if len > self.remaining() {
            return None;
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Some(slice)
    }

    fn read_u32(&mut self, field: &str) -> Result<u32> {
        let bytes = self
            .take(4)
            .ok_or_else(|| LusakeyError::InvalidVaultFormat(format!("truncated {field}")))?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(raw))
    }

    fn read_len(&mut self, field: &str) -> Result<usize> {
        let len = self.read_u32(field)?;
        usize::try_from(len).map_err(|_| {
            LusakeyError::InvalidVaultFormat(format!(
                "{field} {len} exceeds platform address space"
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
