//! Context word harvesting.
//!
//! Text nodes are pulled out of fetched pages by [`extract_fragments`] and
//! reduced to the context word set by [`filter_words`].

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Node};

lazy_static! {
    static ref ALPHANUMERIC: Regex = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
}

/// Common words never worth keeping as context.
pub const STOPWORDS: [&str; 28] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
    "about", "into", "through", "during", "before", "after", "above", "below", "between",
    "among", "within", "without", "under", "over",
];

const MIN_FRAGMENT_LEN: usize = 2;
const MAX_FRAGMENT_LEN: usize = 50;

pub fn is_stopword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    STOPWORDS.iter().any(|stop| *stop == lowered)
}

/// Collects trimmed text nodes in document order. Fragments must be longer
/// than 2 and shorter than 50 bytes and must not be a stopword.
pub fn extract_fragments(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut fragments = Vec::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let trimmed = text.trim();
            if trimmed.len() > MIN_FRAGMENT_LEN
                && trimmed.len() < MAX_FRAGMENT_LEN
                && !is_stopword(trimmed)
            {
                fragments.push(trimmed.to_string());
            }
        }
    }

    fragments
}

/// Reduces raw fragments to lowercase alphanumeric words longer than two
/// characters, first occurrence wins.
pub fn filter_words<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut words = IndexSet::new();

    for fragment in raw {
        let fragment = fragment.as_ref();
        if !ALPHANUMERIC.is_match(fragment) {
            continue;
        }
        let word = fragment.to_lowercase();
        if word.len() > 2 {
            words.insert(word);
        }
    }

    words.into_iter().collect()
}
