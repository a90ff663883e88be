//! Configuration loading and vault path resolution.

pub mod settings;

pub use settings::Settings;
