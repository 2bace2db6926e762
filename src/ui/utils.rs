//! Utility functions for UI rendering

use crossterm::style::Color;

use crate::constants::{CPU_THRESHOLD_MODERATE, USAGE_THRESHOLD_CRITICAL, USAGE_THRESHOLD_WARNING};
use crate::monitor::ProcessStatus;

/// Block characters used for sparklines, lowest first
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Truncates a string to fit within a given width.
///
/// If the string exceeds `max_len` characters, it is truncated and "..."
/// is appended.
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Returns a color for a system-wide usage percentage.
///
/// # Color Thresholds
/// * Red - Critical usage (>80%)
/// * Yellow - Warning level (>50%)
/// * Green - Everything else
#[must_use]
pub fn usage_color(percent: f64) -> Color {
    if percent > USAGE_THRESHOLD_CRITICAL {
        Color::Red
    } else if percent > USAGE_THRESHOLD_WARNING {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Returns a color for a single process's CPU share.
#[must_use]
pub fn cpu_color(percent: f64) -> Color {
    if percent > CPU_THRESHOLD_MODERATE {
        Color::Yellow
    } else {
        Color::Green
    }
}

#[must_use]
pub fn status_color(status: ProcessStatus) -> Color {
    match status {
        ProcessStatus::Running => Color::Green,
        ProcessStatus::Sleeping => Color::Cyan,
        ProcessStatus::Stopped => Color::Yellow,
        ProcessStatus::Zombie => Color::Red,
    }
}

/// Draws a horizontal bar `width` cells wide filled to `percent`.
#[must_use]
pub fn gauge_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Renders `values` as a row of block characters scaled to `max`.
///
/// Only the last `width` values are drawn. A non-positive `max` falls back
/// to the largest value in the series.
#[must_use]
pub fn sparkline(values: &[f64], max: f64, width: usize) -> String {
    let skip = values.len().saturating_sub(width);
    let visible = &values[skip..];

    let ceiling = if max > 0.0 {
        max
    } else {
        visible.iter().cloned().fold(0.0, f64::max)
    };
    if ceiling <= 0.0 {
        return SPARK_LEVELS[0].to_string().repeat(visible.len());
    }

    let top = (SPARK_LEVELS.len() - 1) as f64;
    visible
        .iter()
        .map(|v| {
            let level = ((v / ceiling).clamp(0.0, 1.0) * top).round() as usize;
            SPARK_LEVELS[level]
        })
        .collect()
}

/// Picks one block character per core for the per-core strip.
#[must_use]
pub fn core_cells(cores: &[f64]) -> String {
    cores
        .iter()
        .map(|&c| sparkline(&[c], 100.0, 1))
        .collect()
}
