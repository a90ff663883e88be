pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod generator;
pub mod interchange;
pub mod logging;
pub mod vault;
