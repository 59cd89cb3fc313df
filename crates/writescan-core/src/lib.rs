//! Core library for writescan.
//!
//! Heuristic writing-quality metrics: word, sentence, and paragraph counts,
//! Flesch Reading Ease, and rule-based insights (tone, grammar, structure,
//! topics, suggestions). Every analysis is a pure function of the input text.
//!
//! # Modules
//!
//! - [`text`] - Word, sentence, paragraph, and syllable segmentation
//! - [`metrics`] - Segmentation results shared by every analysis step
//! - [`readability`] - Basic statistics and Flesch Reading Ease
//! - [`analysis`] - The full pipeline and individual insight rules
//! - [`render`] - Plain-text report rendering
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use writescan_core::analysis::analyze_text;
//!
//! let report = analyze_text("The cat sat. The dog ran fast and happy.").unwrap();
//! assert_eq!(report.basic_stats.word_count, 9);
//! assert_eq!(report.basic_stats.sentence_count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod metrics;
pub mod readability;
pub mod render;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisReport, analyze_text, analyze_text_with_limit};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
