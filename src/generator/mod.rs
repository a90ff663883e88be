//! Random password generator.
//!
//! Characters are drawn uniformly from the union of the selected
//! classes using the thread-local CSPRNG (`rand::rng`, seeded from the
//! OS).  `random_range` rejects out-of-range samples, so every pool
//! character is equally likely.

use rand::Rng;
use zeroize::Zeroizing;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

/// Which character classes to draw from, and how many characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl GeneratorOptions {
    /// The character pool.  Falls back to lowercase when nothing is selected.
    fn pool(&self) -> Vec<char> {
        let mut pool = String::new();
        if self.lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        if pool.is_empty() {
            pool.push_str(LOWERCASE);
        }
        pool.chars().collect()
    }
}

/// Generate a password.  A zero length yields an empty string.
pub fn generate(options: &GeneratorOptions) -> Zeroizing<String> {
    let pool = options.pool();
    let mut rng = rand::rng();

    let mut out = Zeroizing::new(String::with_capacity(options.length));
    for _ in 0..options.length {
        out.push(pool[rng.random_range(0..pool.len())]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_length() {
        for length in [0usize, 1, 16, 64] {
            let opts = GeneratorOptions {
                length,
                ..GeneratorOptions::default()
            };
            assert_eq!(generate(&opts).chars().count(), length);
        }
    }

    #[test]
    fn digits_only() {
        let opts = GeneratorOptions {
            length: 200,
            lowercase: false,
            uppercase: false,
            digits: true,
            symbols: false,
        };
        assert!(generate(&opts).chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn no_class_selected_falls_back_to_lowercase() {
        let opts = GeneratorOptions {
            length: 50,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        };
        assert!(generate(&opts).chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn symbols_come_from_symbol_set() {
        let opts = GeneratorOptions {
            length: 200,
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: true,
        };
        assert!(generate(&opts).chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn outputs_differ() {
        let opts = GeneratorOptions {
            length: 32,
            ..GeneratorOptions::default()
        };
        assert_ne!(*generate(&opts), *generate(&opts));
    }
}
