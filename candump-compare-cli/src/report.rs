//! Report generation
//!
//! Renders the comparison statistics as plain text or JSON.

use crate::config::OutputFormat;
use anyhow::Result;
use candump_compare::Statistics;
use serde::Serialize;

/// Render a report in the requested format
pub fn render(stats: &Statistics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Txt => Ok(render_txt(stats)),
        OutputFormat::Json => render_json(stats),
    }
}

/// Two-line text summary
pub fn render_txt(stats: &Statistics) -> String {
    format!(
        "Loss: {} Dups: {} Corrupt: {} Correct RX/TX: {}\n\
         Delay: {} min {} max {} avg [seconds]",
        stats.loss,
        stats.duplicate,
        stats.corrupt,
        stats.correct,
        format_delay(stats.delay_min),
        format_delay(stats.delay_max),
        stats.average_delay(),
    )
}

fn format_delay(delay: Option<f64>) -> String {
    match delay {
        Some(d) => d.to_string(),
        None => "n/a".to_string(),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    stats: &'a Statistics,
    frames: usize,
    /// `null` when there are no correct round-trips
    average_delay: Option<f64>,
    capture_start: Option<String>,
    capture_end: Option<String>,
}

pub fn render_json(stats: &Statistics) -> Result<String> {
    let average = stats.average_delay();
    let report = JsonReport {
        stats,
        frames: stats.frames(),
        average_delay: (!average.is_nan()).then_some(average),
        capture_start: stats.capture_start().map(|t| t.to_rfc3339()),
        capture_end: stats.capture_end().map(|t| t.to_rfc3339()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
