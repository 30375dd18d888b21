//! Fixed rule catalog for the combination engine.

pub const MORPHOLOGICAL_SUFFIXES: [&str; 27] = [
    "s", "es", "ing", "ed",
    "ly", "ful", "less", "ish",
    "er", "est", "tion", "ment",
    "ity", "ness", "ism", "ist",
    "ize", "ise", "ation", "ification",
    "ology", "graphy", "ics",
    "verse", "world", "net", "sys",
];

pub const CTF_TERMS: [&str; 21] = [
    "flag", "admin", "secret", "hidden", "key", "pass", "login", "auth", "token", "hash",
    "crypto", "encode", "decode", "ctf", "challenge", "pwn", "web", "misc", "forensics",
    "reverse", "binary",
];

pub const YEARS: [&str; 9] = [
    "2020", "2021", "2022", "2023", "2024", "2025", "1999", "2000", "1337",
];

pub const KEYBOARD_PATTERNS: [&str; 6] = ["qwerty", "asdf", "123456", "password", "admin", "root"];

pub const PREFIXES: [&str; 13] = [
    "admin", "user", "test", "super", "root", "guest", "demo", "temp", "new", "old", "backup",
    "hidden", "secret",
];

/// Appended to every context combination.
pub const CTF_SUFFIXES: [&str; 22] = [
    "123", "!", "2024", "2025", "@", "#", "1", "01", "321", "1337", "2023", "2022", "2021",
    "2020", "00", "99", "$$", "admin", "user", "test", "flag", "ctf",
];

/// Joiners placed between the base word and a context word.
pub const CONTEXT_SEPARATORS: [&str; 3] = ["_", "-", "."];

/// Numeric suffixes run `0..=MAX_NUMERIC_SUFFIX`.
pub const MAX_NUMERIC_SUFFIX: u32 = 99;

pub const MIN_CONTEXT_LEN: usize = 3;
pub const MAX_CONTEXT_LEN: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogs_have_no_internal_duplicates() {
        fn unique(list: &[&str]) -> bool {
            list.iter().collect::<HashSet<_>>().len() == list.len()
        }
        assert!(unique(&MORPHOLOGICAL_SUFFIXES));
        assert!(unique(&CTF_TERMS));
        assert!(unique(&YEARS));
        assert!(unique(&KEYBOARD_PATTERNS));
        assert!(unique(&PREFIXES));
        assert!(unique(&CTF_SUFFIXES));
    }

    #[test]
    fn test_years_cover_recent_range() {
        for year in 2020..=2025 {
            assert!(YEARS.contains(&year.to_string().as_str()));
        }
        assert!(YEARS.contains(&"1337"));
    }
}
