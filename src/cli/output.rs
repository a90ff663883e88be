//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Shown in place of a password that was not explicitly revealed.
const MASK: &str = "••••••••";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (#, Title, Category, Username, URL).
///
/// `rows` holds zero-based vault indices; they are displayed 1-based.
pub fn print_entries_table(rows: &[(usize, &Entry)]) {
    if rows.is_empty() {
        info("No matching entries.");
        tip("Run `lusakey add` to add an entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Title", "Category", "Username", "URL"]);

    for (index, e) in rows {
        table.add_row(vec![
            (index + 1).to_string(),
            e.title.clone(),
            e.category.clone(),
            e.username.clone(),
            e.url.clone(),
        ]);
    }

    println!("{table}");
}

/// Print every field of one entry; the password is masked unless `reveal`.
pub fn print_entry(number: usize, entry: &Entry, reveal: bool) {
    let password = if reveal { entry.password.as_str() } else { MASK };
    let rows = [
        ("Title", entry.title.as_str()),
        ("Category", entry.category.as_str()),
        ("Username", entry.username.as_str()),
        ("Password", password),
        ("URL", entry.url.as_str()),
    ];

    println!("{}", style(format!("Entry #{number}")).bold());
    for (label, value) in rows {
        println!("  {} {value}", style(format!("{label:<9}")).dim());
    }
    if !entry.notes.is_empty() {
        println!("  {}", style("Notes").dim());
        for line in entry.notes.lines() {
            println!("    {line}");
        }
    }
}
