//! Frequency-based topic extraction.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::word_lists::STOP_WORDS;

/// Alphabetic runs of four or more letters.
static TOPIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("valid regex"));

/// Candidates must be longer than this.
const MIN_TOPIC_LEN: usize = 4;

const MAX_TOPICS: usize = 5;

/// Return up to five of the most frequent non-stop-words.
///
/// Ties keep first-seen order.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_topics(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    // (token, count) in first-seen order; index maps token -> position
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in TOPIC_TOKEN.find_iter(&lowered).map(|m| m.as_str()) {
        if token.len() <= MIN_TOPIC_LEN || STOP_WORDS.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort preserves first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_TOPICS)
        .map(|(token, _)| token.to_string())
        .collect()
}
