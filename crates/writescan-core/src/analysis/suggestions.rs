//! Actionable writing suggestions.

const MAX_SUGGESTIONS: usize = 3;

/// Word count above which a single block of text should be split.
const LONG_BLOCK_WORDS: usize = 100;

const DEFAULT_SUGGESTIONS: [&str; 3] = [
    "Proofread for any typos or errors",
    "Consider your target audience when reviewing",
    "Read aloud to check flow and rhythm",
];

/// Suggest edits based on sentence length, diversity, and layout.
pub fn generate_suggestions(
    avg_sentence_length: f64,
    vocabulary_diversity: f64,
    blank_line_blocks: usize,
    word_count: usize,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if avg_sentence_length > 20.0 {
        suggestions.push("Break down complex sentences for better readability");
    }
    if vocabulary_diversity < 0.6 {
        suggestions.push("Use synonyms to avoid word repetition");
    }
    if blank_line_blocks == 1 && word_count > LONG_BLOCK_WORDS {
        suggestions.push("Consider breaking content into multiple paragraphs");
    }

    if suggestions.is_empty() {
        suggestions.extend(DEFAULT_SUGGESTIONS);
    }

    suggestions
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_fires() {
        assert_eq!(generate_suggestions(12.0, 0.8, 1, 50), DEFAULT_SUGGESTIONS);
    }

    #[test]
    fn long_single_block_should_be_split() {
        let suggestions = generate_suggestions(12.0, 0.8, 1, 200);
        assert_eq!(
            suggestions,
            vec!["Consider breaking content into multiple paragraphs"]
        );
    }

    #[test]
    fn multiple_blocks_are_not_split() {
        assert_eq!(generate_suggestions(12.0, 0.8, 2, 200), DEFAULT_SUGGESTIONS);
    }

    #[test]
    fn all_rules_fire_in_order() {
        let suggestions = generate_suggestions(22.0, 0.3, 1, 150);
        assert_eq!(
            suggestions,
            vec![
                "Break down complex sentences for better readability",
                "Use synonyms to avoid word repetition",
                "Consider breaking content into multiple paragraphs",
            ]
        );
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(generate_suggestions(20.0, 0.6, 1, 100), DEFAULT_SUGGESTIONS);
    }
}
