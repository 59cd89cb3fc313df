//! Basic statistics and Flesch Reading Ease scoring.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. Scores are clamped to 0–100 and rounded to
//! one decimal place. Syllables come from the vowel-group heuristic in
//! [`text::count_syllables`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::DocumentMetrics;
use crate::text;

/// Reading speed used for time estimates.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Counts, averages, and readability for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicStats {
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Number of non-empty sentences.
    pub sentence_count: usize,
    /// Number of non-empty blank-line-separated paragraphs.
    pub paragraph_count: usize,
    /// Number of characters, whitespace included.
    pub character_count: usize,
    /// Words per sentence, one decimal place.
    pub avg_words_per_sentence: f64,
    /// Flesch Reading Ease, 0–100, one decimal place.
    pub readability_score: f64,
    /// Whole minutes at 200 words per minute, at least 1.
    pub estimated_reading_time: usize,
}

/// Compute basic statistics from pre-segmented metrics.
#[tracing::instrument(skip_all, fields(words = metrics.word_count()))]
pub fn basic_stats(metrics: &DocumentMetrics<'_>) -> BasicStats {
    let avg_syllables = average_syllables_per_word(&metrics.words);
    let score = flesch_reading_ease(metrics.avg_sentence_length, avg_syllables);

    BasicStats {
        word_count: metrics.word_count(),
        sentence_count: metrics.sentence_count(),
        paragraph_count: metrics.paragraphs.len(),
        character_count: metrics.character_count,
        avg_words_per_sentence: round1(metrics.avg_sentence_length),
        readability_score: round1(score),
        estimated_reading_time: reading_time_minutes(metrics.word_count()),
    }
}

/// Flesch Reading Ease clamped to 0–100 (unrounded).
///
/// Evaluated left to right without fused multiply-add.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_reading_ease(avg_sentence_length: f64, avg_syllables_per_word: f64) -> f64 {
    (206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word).clamp(0.0, 100.0)
}

/// Mean syllable count across words (0 when there are no words).
pub fn average_syllables_per_word(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| text::count_syllables(w)).sum();
    total as f64 / words.len() as f64
}

/// Estimated reading time in whole minutes, never less than 1.
///
/// Halves round to the nearest even minute.
pub fn reading_time_minutes(word_count: usize) -> usize {
    let minutes = (word_count as f64 / WORDS_PER_MINUTE).round_ties_even() as usize;
    minutes.max(1)
}

/// Descriptive band for a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    /// 90 and above.
    VeryEasy,
    /// 80 to 89.9.
    Easy,
    /// 70 to 79.9.
    FairlyEasy,
    /// 60 to 69.9.
    Standard,
    /// 50 to 59.9.
    FairlyDifficult,
    /// 30 to 49.9.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl ReadabilityBand {
    /// Classify a Flesch Reading Ease score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round to one decimal place.
///
/// Rounds the exact binary value, so 4.35 (stored as 4.3499...) becomes 4.3
/// and 0.05 (stored as 0.05000...03) becomes 0.1. Exact halves go to even.
pub(crate) fn round1(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}
