//! Writing analysis pipeline.
//!
//! [`analyze_text`] segments the document once into [`DocumentMetrics`],
//! then runs each insight rule as an independent pure function and merges
//! the results into an [`AnalysisReport`].
//!
//! Callers can also invoke the rules individually.

pub mod feedback;
pub mod grammar;
pub mod quality;
pub mod reports;
pub mod structure;
pub mod suggestions;
pub mod tone;
pub mod topics;

pub use reports::{AnalysisReport, Feedback, Insights, ToneStyle};

use crate::error::{AnalysisError, AnalysisResult};
use crate::metrics::DocumentMetrics;
use crate::readability;

/// Analyze a document.
///
/// Returns [`AnalysisError::EmptyInput`] for empty or whitespace-only text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_text(text: &str) -> AnalysisResult<AnalysisReport> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let metrics = DocumentMetrics::from_text(text);
    let basic_stats = readability::basic_stats(&metrics);
    let ai_analysis = insights(text, &metrics);

    tracing::debug!(
        words = basic_stats.word_count,
        quality = ai_analysis.quality_score,
        "analysis complete"
    );

    Ok(AnalysisReport {
        basic_stats,
        ai_analysis,
    })
}

/// Analyze a document after checking it against a byte limit.
///
/// Blank text is [`AnalysisError::EmptyInput`] whatever its size. `None`
/// disables the limit.
pub fn analyze_text_with_limit(
    text: &str,
    max_bytes: Option<usize>,
) -> AnalysisResult<AnalysisReport> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    check_input_size(text, max_bytes)?;
    analyze_text(text)
}

/// Reject input larger than `max_bytes`.
pub const fn check_input_size(text: &str, max_bytes: Option<usize>) -> AnalysisResult<()> {
    if let Some(limit) = max_bytes
        && text.len() > limit
    {
        return Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

fn insights(text: &str, metrics: &DocumentMetrics<'_>) -> Insights {
    let asl = metrics.avg_sentence_length;
    let diversity = metrics.vocabulary_diversity;

    let Feedback {
        strengths,
        improvements,
    } = feedback::generate_feedback(asl, diversity, metrics.blank_line_blocks);

    Insights {
        quality_score: quality::quality_score(asl, diversity),
        grammar_assessment: grammar::assess_grammar(&metrics.sentences),
        tone_and_style: tone::classify_tone(text),
        structure_analysis: structure::analyze_structure(
            metrics.heading_count,
            metrics.paragraphs.len(),
        ),
        strengths,
        improvements,
        main_topics: topics::extract_topics(text),
        suggestions: suggestions::generate_suggestions(
            asl,
            diversity,
            metrics.blank_line_blocks,
            metrics.word_count(),
        ),
    }
}
