//! Strengths and areas for improvement.

use super::reports::Feedback;

/// Most items reported per list.
const MAX_ITEMS: usize = 3;

const DEFAULT_STRENGTHS: [&str; 2] = ["Clear communication", "Readable content"];

const DEFAULT_IMPROVEMENTS: [&str; 2] = [
    "Consider adding more specific examples",
    "Review for clarity and conciseness",
];

/// Build strengths and improvements from sentence length, diversity, and
/// the number of blank-line blocks.
///
/// Either list falls back to a fixed pair when none of its rules fire.
pub fn generate_feedback(
    avg_sentence_length: f64,
    vocabulary_diversity: f64,
    blank_line_blocks: usize,
) -> Feedback {
    let mut strengths = Vec::new();
    if (15.0..=20.0).contains(&avg_sentence_length) {
        strengths.push("Good sentence length variation");
    }
    if vocabulary_diversity > 0.7 {
        strengths.push("Rich vocabulary usage");
    }
    if blank_line_blocks > 1 {
        strengths.push("Clear paragraph organization");
    }
    if strengths.is_empty() {
        strengths.extend(DEFAULT_STRENGTHS);
    }

    let mut improvements = Vec::new();
    if avg_sentence_length < 10.0 {
        improvements.push("Consider combining some short sentences");
    } else if avg_sentence_length > 25.0 {
        improvements.push("Consider breaking down long sentences");
    }
    if vocabulary_diversity < 0.5 {
        improvements.push("Try using more varied vocabulary");
    }
    if improvements.is_empty() {
        improvements.extend(DEFAULT_IMPROVEMENTS);
    }

    Feedback {
        strengths: to_owned_capped(&strengths),
        improvements: to_owned_capped(&improvements),
    }
}

fn to_owned_capped(items: &[&str]) -> Vec<String> {
    items.iter().take(MAX_ITEMS).map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_strengths_fire() {
        let fb = generate_feedback(17.0, 0.9, 3);
        assert_eq!(
            fb.strengths,
            vec![
                "Good sentence length variation",
                "Rich vocabulary usage",
                "Clear paragraph organization",
            ]
        );
        assert_eq!(fb.improvements, DEFAULT_IMPROVEMENTS.to_vec());
    }

    #[test]
    fn defaults_when_nothing_fires() {
        let fb = generate_feedback(12.0, 0.6, 1);
        assert_eq!(fb.strengths, DEFAULT_STRENGTHS.to_vec());
        assert_eq!(fb.improvements, DEFAULT_IMPROVEMENTS.to_vec());
    }

    #[test]
    fn repetitive_short_text_needs_vocabulary() {
        let fb = generate_feedback(4.0, 0.01, 1);
        assert_eq!(
            fb.improvements,
            vec![
                "Consider combining some short sentences",
                "Try using more varied vocabulary",
            ]
        );
        assert_eq!(fb.strengths, DEFAULT_STRENGTHS.to_vec());
    }

    #[test]
    fn long_sentences_are_flagged() {
        let fb = generate_feedback(30.0, 0.6, 1);
        assert_eq!(fb.improvements, vec!["Consider breaking down long sentences"]);
    }

    #[test]
    fn trailing_blank_line_counts_as_organization() {
        let fb = generate_feedback(12.0, 0.6, 2);
        assert_eq!(fb.strengths, vec!["Clear paragraph organization"]);
    }
}
