//! History sparklines and the top CPU consumers

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::constants::TOP_PROCESS_COUNT;
use crate::monitor::{ProcessRecord, TelemetrySnapshot};

use super::utils::{sparkline, truncate_string};

/// Width of the label column in front of each chart row
const CHART_LABEL_WIDTH: usize = 12;

/// Renders the four history rows plus the time axis.
pub fn render_history(stdout: &mut impl Write, history: &TelemetrySnapshot, width: usize) -> io::Result<()> {
    let chart_width = width.saturating_sub(CHART_LABEL_WIDTH + 12);

    // Disk throughput shares one scale so read and write stay comparable
    let disk_max = history
        .disk_read
        .iter()
        .chain(history.disk_write.iter())
        .cloned()
        .fold(0.0, f64::max);

    let rows: [(&str, &[f64], f64, Color); 4] = [
        ("CPU %", history.cpu.as_slice(), 100.0, Color::Green),
        ("Memory %", history.memory.as_slice(), 100.0, Color::Blue),
        ("Disk R", history.disk_read.as_slice(), disk_max, Color::Yellow),
        ("Disk W", history.disk_write.as_slice(), disk_max, Color::Magenta),
    ];

    for (label, values, max, color) in rows {
        let latest = values.last().copied().unwrap_or(0.0);
        execute!(
            stdout,
            Print(format!(" {:<w$}", label, w = CHART_LABEL_WIDTH - 1)),
            SetForegroundColor(color),
            Print(sparkline(values, max, chart_width)),
            ResetColor,
            Print(format!(" {:>8.1}\r\n", latest)),
        )?;
    }

    execute!(
        stdout,
        SetForegroundColor(Color::DarkGrey),
        Print(format!("{:width$}", time_axis(history, chart_width), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

/// Oldest and newest labels under the sparklines.
///
/// Slots that were never filled have no label and are shown as "--:--:--".
pub fn time_axis(history: &TelemetrySnapshot, chart_width: usize) -> String {
    let labels = history.labels();
    let shown = labels.len().min(chart_width);
    let visible = &labels[labels.len() - shown..];

    let placeholder = |s: &String| -> String {
        if s.is_empty() {
            "--:--:--".to_string()
        } else {
            s.clone()
        }
    };
    let first = visible.first().map(placeholder).unwrap_or_default();
    let last = visible.last().map(placeholder).unwrap_or_default();
    let gap = shown.saturating_sub(first.len() + last.len());

    format!(
        "{:w$}{}{:gap$}{}",
        "",
        first,
        "",
        last,
        w = CHART_LABEL_WIDTH,
        gap = gap
    )
}

/// Renders the "Top CPU" line.
pub fn render_top_processes(stdout: &mut impl Write, top: &[&ProcessRecord], width: usize) -> io::Result<()> {
    let entries: Vec<String> = top
        .iter()
        .take(TOP_PROCESS_COUNT)
        .map(|p| format!("{} {:.1}%", truncate_string(&p.name, 16), p.cpu_percent))
        .collect();
    let line = format!(" Top CPU:   {}", entries.join("  |  "));

    execute!(
        stdout,
        SetForegroundColor(Color::Yellow),
        Print(format!("{:width$}", truncate_string(&line, width), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn snapshot_with(timestamps: Vec<Option<chrono::DateTime<Local>>>) -> TelemetrySnapshot {
        let n = timestamps.len();
        TelemetrySnapshot {
            timestamps,
            cpu: vec![0.0; n],
            memory: vec![0.0; n],
            disk_read: vec![0.0; n],
            disk_write: vec![0.0; n],
        }
    }

    #[test]
    fn test_time_axis_shows_oldest_and_newest() {
        let t1 = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single();
        let t2 = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 2).single();
        let axis = time_axis(&snapshot_with(vec![None, t1, t2]), 30);

        assert!(axis.contains("--:--:--"));
        assert!(axis.trim_end().ends_with("10:00:02"));
        assert!(!axis.contains("10:00:00"));
    }

    #[test]
    fn test_time_axis_empty_history() {
        let axis = time_axis(&snapshot_with(Vec::new()), 30);
        assert!(axis.trim().is_empty());
    }
}
