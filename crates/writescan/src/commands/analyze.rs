//! Analyze command: full writing report for one file.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use chrono::Local;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use writescan_core::render::RenderOptions;
use writescan_core::{analysis, render};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Write the report to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Minimum acceptable quality score (1-10).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub min_quality: Option<u8>,
}

/// Analyze a file and print (or save) the report.
///
/// A saved text report also carries a generation timestamp and the analyzed text.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analysis::analyze_text(&content)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    let rendered = if global_json {
        serde_json::to_string_pretty(&report)?
    } else if args.output.is_some() {
        let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        render::render_text_report(
            &report,
            &RenderOptions {
                source: args.file.file_name(),
                generated: Some(generated.as_str()),
                extracted_text: Some(content.as_str()),
            },
        )
    } else {
        render::render_text_report(
            &report,
            &RenderOptions {
                source: args.file.file_name(),
                ..RenderOptions::default()
            },
        )
    };

    match args.output {
        Some(ref path) => {
            std::fs::write(path.as_std_path(), format!("{}\n", rendered.trim_end()))
                .with_context(|| format!("failed to write {path}"))?;
            info!(path = %path, "report written");
            if !global_json {
                println!("{} report written to {}", "OK:".green(), path.cyan());
            }
        }
        None => println!("{}", rendered.trim_end()),
    }

    let score = report.ai_analysis.quality_score;
    if let Some(min) = args.min_quality {
        if score < min {
            bail!(
                "{} quality score {score}/10 is below minimum {min}. Review the suggestions above.",
                args.file,
            );
        }
        if !global_json {
            println!("{} {} scores {score}/10 (min: {min})", "PASS:".green(), args.file);
        }
    }

    Ok(())
}
