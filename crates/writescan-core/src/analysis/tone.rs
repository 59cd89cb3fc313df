//! Tone and style classification.

use crate::word_lists::{FORMAL_INDICATORS, INFORMAL_INDICATORS};

use super::reports::ToneStyle;

/// Classify the register of `text` by indicator words.
///
/// Each indicator counts once if it appears anywhere in the lowercased text,
/// including inside longer words ("justify" contains "just").
#[tracing::instrument(skip_all)]
pub fn classify_tone(text: &str) -> ToneStyle {
    let lowered = text.to_lowercase();
    let formal = count_present(&lowered, FORMAL_INDICATORS.iter().copied());
    let informal = count_present(&lowered, INFORMAL_INDICATORS.iter().copied());

    match formal.cmp(&informal) {
        std::cmp::Ordering::Greater => ToneStyle::Formal,
        std::cmp::Ordering::Less => ToneStyle::Conversational,
        std::cmp::Ordering::Equal => ToneStyle::Balanced,
    }
}

fn count_present<'a>(haystack: &str, indicators: impl Iterator<Item = &'a str>) -> usize {
    indicators.filter(|word| haystack.contains(word)).count()
}
