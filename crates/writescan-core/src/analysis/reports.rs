//! Report structs for writing analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in HTTP responses, CLI JSON output, and MCP tool responses.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::BasicStats;

/// Complete analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Counts, averages, and readability.
    pub basic_stats: BasicStats,
    /// Rule-based quality insights.
    pub ai_analysis: Insights,
}

/// Rule-based writing insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Insights {
    /// Overall quality on a 1–10 scale.
    pub quality_score: u8,
    /// Sentence-shape grammar note.
    pub grammar_assessment: String,
    /// Register classification.
    pub tone_and_style: ToneStyle,
    /// Heading and paragraph layout note.
    pub structure_analysis: String,
    /// Up to three strengths.
    pub strengths: Vec<String>,
    /// Up to three areas for improvement.
    pub improvements: Vec<String>,
    /// Up to five most frequent topic words.
    pub main_topics: Vec<String>,
    /// Up to three suggestions.
    pub suggestions: Vec<String>,
}

/// Writing register inferred from indicator words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ToneStyle {
    /// More formal than informal indicators.
    #[serde(rename = "Formal and professional")]
    Formal,
    /// More informal than formal indicators.
    #[serde(rename = "Conversational and informal")]
    Conversational,
    /// Equal counts, including none.
    #[serde(rename = "Balanced and neutral")]
    Balanced,
}

impl ToneStyle {
    /// Human-readable description.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Formal => "Formal and professional",
            Self::Conversational => "Conversational and informal",
            Self::Balanced => "Balanced and neutral",
        }
    }
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strengths and improvements produced together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Feedback {
    /// What the text does well.
    pub strengths: Vec<String>,
    /// What the text could do better.
    pub improvements: Vec<String>,
}
