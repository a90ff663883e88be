//! Plaintext serialization of vault entries.
//!
//! One entry per line, six tab-separated fields in the order title,
//! category, username, password, url, notes.  Inside a field `\`, tab
//! and newline are written as `\\`, `\t` and `\n`, so a raw newline only
//! ever ends a record and a raw tab only ever separates fields.
//!
//! Older vaults stored five fields with no url.  A line with exactly
//! five fields is read as {title, category, username, password, notes}.
//! The shape is decided by counting separators alone, so a five-field
//! line cannot be told apart from a six-field record that lost its last
//! separator.  That ambiguity is kept for compatibility.

use zeroize::Zeroizing;

use super::entry::Entry;

const FIELD_SEP: char = '\t';
const RECORD_SEP: char = '\n';

/// Serialize entries to UTF-8 bytes.  The buffer is wiped on drop.
pub fn serialize(entries: &[Entry]) -> Zeroizing<Vec<u8>> {
    let mut text = Zeroizing::new(String::new());
    for e in entries {
        let fields = [
            &e.title,
            &e.category,
            &e.username,
            &e.password,
            &e.url,
            &e.notes,
        ];
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                text.push(FIELD_SEP);
            }
            escape_into(&mut text, field);
        }
        text.push(RECORD_SEP);
    }
    Zeroizing::new(std::mem::take(&mut *text).into_bytes())
}

/// Parse bytes written by `serialize` (or the legacy five-field shape).
///
/// Never fails.  Blank lines are skipped and invalid UTF-8 sequences
/// decode to U+FFFD.
pub fn deserialize(bytes: &[u8]) -> Vec<Entry> {
    let text = Zeroizing::new(String::from_utf8_lossy(bytes).into_owned());

    text.split(RECORD_SEP)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Entry {
    let fields: Vec<&str> = line.split(FIELD_SEP).collect();
    let field = |i: usize| fields.get(i).map(|f| unescape(f)).unwrap_or_default();
    // On a short line a field only counts once the separator after it
    // has been seen; the unterminated tail is dropped.
    let closed = |i: usize| {
        if i + 1 < fields.len() {
            field(i)
        } else {
            String::new()
        }
    };

    match fields.len() {
        // Legacy shape: no url column.
        5 => Entry {
            title: field(0),
            category: field(1),
            username: field(2),
            password: field(3),
            url: String::new(),
            notes: field(4),
        },
        // Current shape.  Anything past the fifth separator belongs to notes.
        n if n >= 6 => Entry {
            title: field(0),
            category: field(1),
            username: field(2),
            password: field(3),
            url: field(4),
            notes: unescape(&fields[5..].join("\t")),
        },
        _ => Entry {
            title: closed(0),
            category: closed(1),
            username: closed(2),
            password: closed(3),
            ..Entry::default()
        },
    }
}

fn escape_into(out: &mut String, field: &str) {
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
}

/// Reverse `escape_into`.  `\x` for any other `x` yields `x`; a lone
/// trailing backslash is dropped.
fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(text: &str) -> Vec<Entry> {
        deserialize(text.as_bytes())
    }

    #[test]
    fn special_characters_round_trip() {
        let entry = Entry {
            title: "Site".into(),
            notes: "line1\nline2\tend\\done".into(),
            ..Entry::default()
        };

        let bytes = serialize(std::slice::from_ref(&entry));
        let back = deserialize(&bytes);
        assert_eq!(back, vec![entry]);
    }

    #[test]
    fn serialize_escapes_and_terminates_lines() {
        let entry = Entry {
            title: "a\tb".into(),
            category: "c\\d".into(),
            username: "u".into(),
            password: "p".into(),
            url: "x".into(),
            notes: "n1\nn2".into(),
        };
        let bytes = serialize(&[entry]);
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            "a\\tb\tc\\\\d\tu\tp\tx\tn1\\nn2\n"
        );
    }

    #[test]
    fn legacy_five_field_line_fills_notes_not_url() {
        let entries = parse("Site\tWork\tuser\tpass\tsomenote");
        assert_eq!(
            entries,
            vec![Entry {
                title: "Site".into(),
                category: "Work".into(),
                username: "user".into(),
                password: "pass".into(),
                url: String::new(),
                notes: "somenote".into(),
            }]
        );
    }

    #[test]
    fn current_six_field_line() {
        let entries = parse("Site\tWork\tuser\tpass\thttp://x\tsomenote");
        assert_eq!(entries[0].url, "http://x");
        assert_eq!(entries[0].notes, "somenote");
        assert_eq!(entries[0].password, "pass");
    }

    #[test]
    fn extra_separators_stay_in_notes() {
        let entries = parse("t\tc\tu\tp\turl\tnote\twith\ttabs");
        assert_eq!(entries[0].url, "url");
        assert_eq!(entries[0].notes, "note\twith\ttabs");
    }

    #[test]
    fn short_lines_keep_only_terminated_fields() {
        let entries = parse("only-title\n\nt\tc\tu\nt\tc\tu\tp");
        assert_eq!(entries.len(), 3);

        // No separator at all: nothing is terminated.
        assert_eq!(entries[0], Entry::default());

        assert_eq!(entries[1].title, "t");
        assert_eq!(entries[1].category, "c");
        assert!(entries[1].username.is_empty());

        assert_eq!(entries[2].username, "u");
        assert!(entries[2].password.is_empty());
        assert!(entries[2].notes.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let entries = parse("\n\na\tb\tc\td\te\tf\n\n");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn empty_input_is_empty_vault() {
        assert!(parse("").is_empty());
        assert!(serialize(&[]).is_empty());
    }

    #[test]
    fn entry_with_all_fields_empty_survives() {
        let bytes = serialize(&[Entry::default()]);
        assert_eq!(bytes.as_slice(), b"\t\t\t\t\t\n");
        assert_eq!(deserialize(&bytes), vec![Entry::default()]);
    }

    #[test]
    fn unknown_escape_and_trailing_backslash() {
        let entries = parse("a\\qb\tc\\");
        assert_eq!(entries[0].title, "aqb");
        assert_eq!(entries[0].category, "c");
    }

    #[test]
    fn invalid_utf8_becomes_replacement_character() {
        let entries = deserialize(b"Site\tWork\tu\tp\t\tcaf\xe9\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Site");
        assert_eq!(entries[0].notes, "caf\u{FFFD}");
    }

    #[test]
    fn order_is_preserved() {
        let entries: Vec<Entry> = (0..5)
            .map(|i| Entry {
                title: format!("entry-{i}"),
                ..Entry::default()
            })
            .collect();
        let back = deserialize(&serialize(&entries));
        assert_eq!(back, entries);
    }

    proptest! {
        #[test]
        fn arbitrary_fields_round_trip(
            title in ".*",
            password in ".*",
            url in ".*",
            notes in "[a-z\\\\\t\n]*",
        ) {
            let entry = Entry {
                title,
                category: "cat".into(),
                username: String::new(),
                password,
                url,
                notes,
            };
            let back = deserialize(&serialize(std::slice::from_ref(&entry)));
            prop_assert_eq!(back, vec![entry]);
        }
    }
}
