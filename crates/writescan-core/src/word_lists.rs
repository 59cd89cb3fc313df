//! Word lists for tone classification and topic extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Connectives that signal a formal register.
pub static FORMAL_INDICATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "therefore",
        "furthermore",
        "consequently",
        "moreover",
        "however",
    ]
    .into_iter()
    .collect()
});

/// Intensifiers and fillers that signal a conversational register.
pub static INFORMAL_INDICATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["really", "pretty", "quite", "very", "just"]
        .into_iter()
        .collect()
});

/// Common words excluded from topic extraction.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "this", "that", "with", "have", "will", "from", "they", "been", "were", "said", "each",
        "which", "their", "time", "would", "there", "could", "other", "more", "very", "what",
        "know", "just", "first", "into", "over", "think", "also", "your", "work", "life", "only",
        "can", "still", "should", "after", "being", "now", "made", "before", "here", "through",
        "when", "where", "much", "some", "these", "many", "then", "them", "well",
    ]
    .into_iter()
    .collect()
});
