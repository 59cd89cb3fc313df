//! Sentence-shape grammar heuristic.

/// Sentences under this many words count as short.
const SHORT_SENTENCE_WORDS: usize = 4;

/// Sentences over this many words count as long.
const LONG_SENTENCE_WORDS: usize = 30;

/// Share of short sentences above which the text is flagged.
const SHORT_SENTENCE_RATIO: f64 = 0.3;

const NO_ISSUES: &str = "Grammar appears to be generally correct with good sentence structure";

/// Flag fragments and run-ons by sentence word counts.
///
/// Returns a fixed positive note when nothing is flagged, otherwise
/// `"Consider reviewing: "` followed by the flags joined with `"; "`.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn assess_grammar(sentences: &[&str]) -> String {
    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();

    let mut issues = Vec::new();

    let short = lengths
        .iter()
        .filter(|&&n| n < SHORT_SENTENCE_WORDS)
        .count();
    if short as f64 > lengths.len() as f64 * SHORT_SENTENCE_RATIO {
        issues.push("Some sentences may be too short");
    }

    if lengths.iter().any(|&n| n > LONG_SENTENCE_WORDS) {
        issues.push("Some sentences may be too long");
    }

    if issues.is_empty() {
        NO_ISSUES.to_string()
    } else {
        format!("Consider reviewing: {}", issues.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_sentences_get_positive_note() {
        let sentences = ["The cat sat on the mat", "The dog ran across the field"];
        assert_eq!(assess_grammar(&sentences), NO_ISSUES);
    }

    #[test]
    fn no_sentences_is_clean() {
        assert_eq!(assess_grammar(&[]), NO_ISSUES);
    }

    #[test]
    fn many_short_sentences_are_flagged() {
        let sentences = ["Stop", "Go now", "The dog ran across the field"];
        assert_eq!(
            assess_grammar(&sentences),
            "Consider reviewing: Some sentences may be too short"
        );
    }

    #[test]
    fn exactly_thirty_percent_short_is_not_flagged() {
        let long_enough = "one two three four";
        let mut sentences = vec!["tiny"; 3];
        sentences.extend(std::iter::repeat_n(long_enough, 7));
        assert_eq!(assess_grammar(&sentences), NO_ISSUES);
    }

    #[test]
    fn long_sentence_is_flagged() {
        let long = "word ".repeat(31);
        let sentences = [long.trim()];
        assert_eq!(
            assess_grammar(&sentences),
            "Consider reviewing: Some sentences may be too long"
        );
    }

    #[test]
    fn both_flags_are_joined() {
        let long = "word ".repeat(40);
        let sentences = ["Hi", long.as_str()];
        assert_eq!(
            assess_grammar(&sentences),
            "Consider reviewing: Some sentences may be too short; Some sentences may be too long"
        );
    }
}
