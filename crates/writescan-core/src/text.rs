//! Text segmentation utilities.
//!
//! Provides word, sentence, and paragraph splitting plus the heuristic
//! syllable counter used by readability scoring. Sentences end at runs of
//! `.`, `!`, or `?`; paragraphs end at blank lines.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence-terminating punctuation.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Silent trailing `e`, `-es`, or `-ed`.
static SILENT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex")
});

/// Leading `y`, which acts as a consonant.
static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").expect("valid regex"));

/// One or two adjacent vowels count as one syllable.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Punctuation stripped from both ends of a word before counting syllables.
const WORD_EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"'];

/// Split text into words on whitespace runs.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, or `?`.
///
/// Each piece is trimmed; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Count the raw pieces between blank-line separators.
///
/// Unlike [`split_paragraphs`], nothing is trimmed or dropped, so trailing
/// separators still count as a block.
pub fn count_blank_line_blocks(text: &str) -> usize {
    text.split("\n\n").count()
}

/// Count lines whose trimmed content starts with `#`.
pub fn count_headings(text: &str) -> usize {
    text.split('\n')
        .filter(|line| line.trim().starts_with('#'))
        .count()
}

/// Estimate the syllable count of a single word.
///
/// The word is lowercased and stripped of surrounding punctuation. Words of
/// three characters or fewer count as one syllable. Otherwise a silent
/// suffix and a leading `y` are removed and vowel groups are counted.
/// Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let lowered = word.to_lowercase();
    let word = lowered.trim_matches(WORD_EDGE_PUNCTUATION);
    if word.chars().count() <= 3 {
        return 1;
    }

    let word = SILENT_SUFFIX.replace(word, "");
    let word = LEADING_Y.replace(&word, "");
    VOWEL_GROUP.find_iter(&word).count().max(1)
}
