//! Entry and Vault types.
//!
//! An `Entry` is one credential record.  A `Vault` is the ordered list
//! of entries the caller owns between `load` and `save`; insertion order
//! is what ends up on disk.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::{LusakeyError, Result};

/// A single credential record.  All six fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(default)]
pub struct Entry {
    pub title: String,
    pub category: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl Entry {
    /// Case-insensitive substring match over every field except the password.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        [
            &self.title,
            &self.username,
            &self.url,
            &self.notes,
            &self.category,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// The in-memory vault: an ordered list of entries.
///
/// Entry contents are wiped when the vault is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vault {
    entries: Vec<Entry>,
}

impl Vault {
    /// An empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based lookup.
    pub fn get(&self, index: usize) -> Result<&Entry> {
        self.entries
            .get(index)
            .ok_or(LusakeyError::EntryNotFound(index))
    }

    /// Append an entry and return its index.
    pub fn push(&mut self, entry: Entry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Append entries in order (used by import).
    pub fn extend<I: IntoIterator<Item = Entry>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    /// Replace the entry at `index`, wiping the old one.
    pub fn update(&mut self, index: usize, entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(LusakeyError::EntryNotFound(index))?;
        slot.zeroize();
        *slot = entry;
        Ok(())
    }

    /// Remove and return the entry at `index`; later entries shift down.
    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(LusakeyError::EntryNotFound(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Entries matching `text` and, if given, exactly in `category`.
    ///
    /// Returns `(index, entry)` pairs in vault order.
    pub fn search<'a>(&'a self, text: &str, category: Option<&str>) -> Vec<(usize, &'a Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| category.map_or(true, |c| e.category == c))
            .filter(|(_, e)| e.matches(text))
            .collect()
    }

    /// Sorted, de-duplicated, non-empty categories.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .entries
            .iter()
            .filter(|e| !e.category.is_empty())
            .map(|e| e.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }
}

impl Drop for Vault {
    fn drop(&mut self) {
        self.entries.zeroize();
    }
}
