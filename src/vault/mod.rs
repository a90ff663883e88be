//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `Vault` types (`entry`)
//! - Tab-separated plaintext entry serialization (`codec`)
//! - The `LSK1` binary container format (`format`)
//! - Password-level seal/open of a plaintext buffer (`envelope`)
//! - High-level `VaultStore` for saving and loading the vault file (`store`)

pub mod codec;
pub mod entry;
pub mod envelope;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, Vault};
pub use envelope::{open, seal};
pub use format::Blob;
pub use store::VaultStore;
