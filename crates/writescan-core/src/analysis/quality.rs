//! Overall writing quality score.

/// Starting point before adjustments.
const BASELINE_SCORE: i32 = 7;

/// Score writing quality on a 1–10 scale.
///
/// Starts at 7, then adjusts by one point each way for sentence length
/// (ideal 15–20 words, penalized below 10 or above 25) and vocabulary
/// diversity (rewarded above 0.7, penalized below 0.5).
pub fn quality_score(avg_sentence_length: f64, vocabulary_diversity: f64) -> u8 {
    let mut score = BASELINE_SCORE;

    if (15.0..=20.0).contains(&avg_sentence_length) {
        score += 1;
    } else if !(10.0..=25.0).contains(&avg_sentence_length) {
        score -= 1;
    }

    if vocabulary_diversity > 0.7 {
        score += 1;
    } else if vocabulary_diversity < 0.5 {
        score -= 1;
    }

    score.clamp(1, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_text_scores_nine() {
        assert_eq!(quality_score(17.0, 0.8), 9);
    }

    #[test]
    fn neutral_text_keeps_baseline() {
        assert_eq!(quality_score(12.0, 0.6), 7);
        assert_eq!(quality_score(25.0, 0.5), 7);
        assert_eq!(quality_score(10.0, 0.7), 7);
    }

    #[test]
    fn poor_text_scores_five() {
        assert_eq!(quality_score(4.0, 0.01), 5);
        assert_eq!(quality_score(30.0, 0.3), 5);
    }

    #[test]
    fn no_sentences_counts_as_short() {
        assert_eq!(quality_score(0.0, 1.0), 7);
    }

    #[test]
    fn score_stays_in_range() {
        for asl in [0.0, 5.0, 12.0, 17.0, 22.0, 40.0] {
            for div in [0.0, 0.4, 0.6, 0.9, 1.0] {
                let score = quality_score(asl, div);
                assert!((1..=10).contains(&score), "{asl} {div} -> {score}");
            }
        }
    }
}
