//! Plain-text rendering of an [`AnalysisReport`].

use crate::analysis::AnalysisReport;
use crate::readability::ReadabilityBand;

/// Optional header and trailer content for a rendered report.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Name of the analyzed document, shown as `Source:`.
    pub source: Option<&'a str>,
    /// Timestamp shown as `Generated:`.
    pub generated: Option<&'a str>,
    /// Analyzed text, appended under `=== EXTRACTED TEXT ===`.
    pub extracted_text: Option<&'a str>,
}

/// Render a report as sectioned plain text.
pub fn render_text_report(report: &AnalysisReport, options: &RenderOptions<'_>) -> String {
    let stats = &report.basic_stats;
    let ai = &report.ai_analysis;

    let mut out = String::from("Writing Analysis Report\n");
    if let Some(generated) = options.generated {
        out.push_str(&format!("Generated: {generated}\n"));
    }
    if let Some(source) = options.source {
        out.push_str(&format!("Source: {source}\n"));
    }

    out.push_str(&section("DOCUMENT STATISTICS"));
    out.push_str(&format!(
        "Word Count: {}\n\
         Sentence Count: {}\n\
         Paragraph Count: {}\n\
         Character Count: {}\n\
         Average Words per Sentence: {}\n\
         Estimated Reading Time: {} minute(s)\n",
        stats.word_count,
        stats.sentence_count,
        stats.paragraph_count,
        stats.character_count,
        stats.avg_words_per_sentence,
        stats.estimated_reading_time,
    ));

    out.push_str(&section("READABILITY ANALYSIS"));
    out.push_str(&format!(
        "Readability Score: {}/100\n{}\n",
        stats.readability_score,
        ReadabilityBand::from_score(stats.readability_score),
    ));

    out.push_str(&section("KEY TOPICS"));
    out.push_str(&numbered(&ai.main_topics));

    out.push_str(&section("WRITING ANALYSIS"));
    out.push_str(&format!(
        "Writing Quality Score: {}/10\n\
         Tone & Style: {}\n\
         Grammar Assessment: {}\n\
         Structure Analysis: {}\n",
        ai.quality_score, ai.tone_and_style, ai.grammar_assessment, ai.structure_analysis,
    ));
    out.push_str("\nStrengths:\n");
    out.push_str(&numbered(&ai.strengths));
    out.push_str("\nAreas for Improvement:\n");
    out.push_str(&numbered(&ai.improvements));
    out.push_str("\nSuggestions:\n");
    out.push_str(&numbered(&ai.suggestions));

    if let Some(text) = options.extracted_text {
        out.push_str(&section("EXTRACTED TEXT"));
        out.push_str(text);
        out.push('\n');
    }

    out
}

fn section(title: &str) -> String {
    format!("\n=== {title} ===\n")
}

fn numbered(items: &[String]) -> String {
    if items.is_empty() {
        return "None identified\n".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}\n", i + 1))
        .collect()
}
