//! One module per subcommand.  Each exposes an `execute` function.

pub mod add;
pub mod categories;
pub mod completions;
pub mod edit;
pub mod export;
pub mod generate;
pub mod import_cmd;
pub mod init;
pub mod list;
pub mod passwd;
pub mod remove;
pub mod show;
