//! Combination engine.
//!
//! Expands a normalized base word and a filtered context word set into a
//! deduplicated candidate list. Every rule family produces its candidates in
//! catalog order and the families are chained in a fixed order, so output is
//! stable across runs.

use indexmap::IndexSet;

use crate::normalize::{leetspeak, lower, reverse, title, upper};
use crate::rules::{
    CONTEXT_SEPARATORS, CTF_SUFFIXES, CTF_TERMS, KEYBOARD_PATTERNS, MAX_CONTEXT_LEN,
    MAX_NUMERIC_SUFFIX, MIN_CONTEXT_LEN, MORPHOLOGICAL_SUFFIXES, PREFIXES, YEARS,
};

/// Produces the full candidate list for `base` and `context`.
///
/// `base` is expected to be normalized already (see
/// [`normalize_base`](crate::normalize::normalize_base)). Duplicates are
/// removed keeping the first occurrence and empty strings are dropped.
pub fn generate(base: &str, context: &[String]) -> Vec<String> {
    let mut candidates = Candidates::default();

    candidates.extend(generate_base_variants(base));
    candidates.extend(generate_morphological(base));
    candidates.extend(generate_ctf_terms(base));
    candidates.extend(generate_years(base));
    candidates.extend(generate_keyboard(base));
    candidates.extend(generate_numeric(base));
    candidates.extend(generate_prefixes(base));

    for word in context {
        candidates.extend(generate_context_combinations(base, word));
    }

    candidates.into_vec()
}

/// Insertion-ordered set that ignores empty strings.
#[derive(Default)]
struct Candidates {
    seen: IndexSet<String>,
}

impl Candidates {
    fn extend<I: IntoIterator<Item = String>>(&mut self, items: I) {
        for item in items {
            if !item.is_empty() {
                self.seen.insert(item);
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.seen.into_iter().collect()
    }
}

fn generate_base_variants(base: &str) -> Vec<String> {
    vec![
        base.to_string(),
        upper(base),
        title(base),
        reverse(base),
        leetspeak(base),
    ]
}

fn generate_morphological(base: &str) -> Vec<String> {
    MORPHOLOGICAL_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{}", base, suffix))
        .collect()
}

fn generate_ctf_terms(base: &str) -> Vec<String> {
    let mut variations = Vec::new();

    for term in &CTF_TERMS {
        variations.push(format!("{}{}", base, term));
        variations.push(format!("{}{}", term, base));
        variations.push(format!("{}_{}", base, term));
        variations.push(format!("{}_{}", term, base));
    }

    variations
}

fn generate_years(base: &str) -> Vec<String> {
    let mut variations = Vec::new();

    for year in &YEARS {
        variations.push(format!("{}{}", base, year));
        variations.push(format!("{}{}", year, base));
    }

    variations
}

fn generate_keyboard(base: &str) -> Vec<String> {
    let mut variations = Vec::new();

    for pattern in &KEYBOARD_PATTERNS {
        variations.push(format!("{}{}", base, pattern));
        variations.push(format!("{}{}", pattern, base));
    }

    variations
}

// Single digits get both the zero-padded and the bare form.
fn generate_numeric(base: &str) -> Vec<String> {
    let mut variations = Vec::new();

    for num in 0..=MAX_NUMERIC_SUFFIX {
        if num < 10 {
            variations.push(format!("{}{:02}", base, num));
        }
        variations.push(format!("{}{}", base, num));
    }

    variations
}

fn generate_prefixes(base: &str) -> Vec<String> {
    let mut variations = Vec::new();

    for prefix in &PREFIXES {
        variations.push(format!("{}{}", prefix, base));
        variations.push(format!("{}_{}", prefix, base));
        variations.push(format!("{}-{}", prefix, base));
    }

    variations
}

fn is_usable_context(word: &str) -> bool {
    (MIN_CONTEXT_LEN..=MAX_CONTEXT_LEN).contains(&word.len())
}

fn context_combos(base: &str, word: &str) -> Vec<String> {
    let mut combos = vec![
        word.to_string(),
        lower(word),
        upper(word),
        title(word),
        reverse(word),
        leetspeak(word),
        format!("{}{}", base, word),
        format!("{}{}", word, base),
    ];

    for sep in &CONTEXT_SEPARATORS {
        combos.push(format!("{}{}{}", base, sep, word));
        combos.push(format!("{}{}{}", word, sep, base));
    }

    combos
}

fn generate_context_combinations(base: &str, word: &str) -> Vec<String> {
    if !is_usable_context(word) {
        return Vec::new();
    }

    let mut variations = Vec::new();

    for combo in context_combos(base, word) {
        let suffixed: Vec<String> = CTF_SUFFIXES
            .iter()
            .chain(YEARS.iter())
            .map(|suffix| format!("{}{}", combo, suffix))
            .collect();
        variations.push(combo);
        variations.extend(suffixed);
    }

    variations
}
