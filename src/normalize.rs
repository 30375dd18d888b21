//! Pure string transforms shared by the engine and the CLI.

pub fn normalize_base(input: &str) -> String {
    input.to_lowercase().replace(' ', "")
}

pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Capitalises the first letter of every word. Letters after the first are
/// left untouched, so `"rOOT"` becomes `"ROOT"`.
pub fn title(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev = ' ';

    for ch in s.chars() {
        if is_word_separator(prev) {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        prev = ch;
    }

    result
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        return !(ch.is_ascii_alphanumeric() || ch == '_');
    }
    !ch.is_alphanumeric() && ch.is_whitespace()
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn leetspeak_char(ch: char) -> char {
    match ch {
        'a' | 'A' => '@',
        'e' | 'E' => '3',
        'i' | 'I' => '1',
        'o' | 'O' => '0',
        's' | 'S' => '$',
        't' | 'T' => '7',
        'l' | 'L' => '1',
        'g' | 'G' => '9',
        other => other,
    }
}

pub fn leetspeak(s: &str) -> String {
    s.chars().map(leetspeak_char).collect()
}
