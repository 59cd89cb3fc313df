//! Derived document metrics shared by every analysis step.
//!
//! Segmentation runs once per document; the statistics and insight rules
//! read from the resulting [`DocumentMetrics`] instead of re-splitting.

use std::collections::HashSet;

use crate::text;

/// Segmentation results and the ratios derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetrics<'a> {
    /// Whitespace-delimited words, in order.
    pub words: Vec<&'a str>,
    /// Trimmed, non-empty sentences.
    pub sentences: Vec<&'a str>,
    /// Trimmed, non-empty paragraphs.
    pub paragraphs: Vec<&'a str>,
    /// Raw pieces between blank-line separators, empty pieces included.
    pub blank_line_blocks: usize,
    /// Lines starting with `#` after trimming.
    pub heading_count: usize,
    /// Number of characters in the raw text, whitespace included.
    pub character_count: usize,
    /// Words per sentence (0 when there are no sentences).
    pub avg_sentence_length: f64,
    /// Distinct words over total words (0 when there are no words).
    pub vocabulary_diversity: f64,
}

impl<'a> DocumentMetrics<'a> {
    /// Segment `text` and compute the shared ratios.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn from_text(text: &'a str) -> Self {
        let words = text::split_words(text);
        let sentences = text::split_sentences(text);
        let paragraphs = text::split_paragraphs(text);

        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            words.len() as f64 / sentences.len() as f64
        };
        let vocabulary_diversity = vocabulary_diversity(&words);

        Self {
            blank_line_blocks: text::count_blank_line_blocks(text),
            heading_count: text::count_headings(text),
            character_count: text.chars().count(),
            words,
            sentences,
            paragraphs,
            avg_sentence_length,
            vocabulary_diversity,
        }
    }

    /// Number of words.
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of sentences.
    pub const fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Ratio of distinct word forms to total words.
///
/// Words are compared exactly as written: "The" and "the" are distinct.
pub fn vocabulary_diversity(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = words.iter().copied().collect();
    distinct.len() as f64 / words.len() as f64
}
