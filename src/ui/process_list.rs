//! Process table rendering

use std::io;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::app::App;
use crate::monitor::{format_megabytes, format_uptime, ProcessRecord};

use super::utils::{cpu_color, status_color, truncate_string};

/// Text before the CPU cell: PID and name
fn row_prefix(process: &ProcessRecord) -> String {
    format!(" {:>8}  {:<20}  ", process.pid, truncate_string(&process.name, 20))
}

/// Text between CPU and Status: memory and owner
fn row_middle(process: &ProcessRecord) -> String {
    format!(
        "  {:>10}  {:<10}  ",
        format_megabytes(process.memory_mb),
        truncate_string(&process.owner, 10)
    )
}

/// Text after the Status cell: priority and uptime
fn row_suffix(process: &ProcessRecord) -> String {
    format!("  {:>9}  {:>10}", process.priority, format_uptime(process.uptime_seconds))
}

/// Renders the scrollable process table.
///
/// The selected row is highlighted; CPU and Status cells keep their
/// colors either way.
pub fn render_process_list(
    stdout: &mut io::Stdout,
    app: &mut App,
    visible_rows: usize,
    width: usize,
) -> io::Result<()> {
    // Adjust scroll offset to keep selection visible
    if app.selected_index < app.scroll_offset {
        app.scroll_offset = app.selected_index;
    } else if visible_rows > 0 && app.selected_index >= app.scroll_offset + visible_rows {
        app.scroll_offset = app.selected_index - visible_rows + 1;
    }

    for (i, process) in app
        .visible
        .iter()
        .skip(app.scroll_offset)
        .take(visible_rows)
        .enumerate()
    {
        let is_selected = app.scroll_offset + i == app.selected_index;

        let prefix = row_prefix(process);
        let cpu_str = format!("{:>7.1}", process.cpu_percent);
        let middle = row_middle(process);
        let status_str = format!("{:<9}", process.status.name());
        let suffix = row_suffix(process);
        let used = prefix.chars().count()
            + cpu_str.len()
            + middle.chars().count()
            + status_str.len();
        let suffix = format!("{:w$}", suffix, w = width.saturating_sub(used));

        let (background, foreground) = if is_selected {
            (Color::DarkCyan, Color::White)
        } else {
            (Color::Reset, Color::Reset)
        };

        execute!(
            stdout,
            SetBackgroundColor(background),
            SetForegroundColor(foreground),
            Print(&prefix),
            SetForegroundColor(cpu_color(process.cpu_percent)),
            Print(&cpu_str),
            SetForegroundColor(foreground),
            Print(&middle),
            SetForegroundColor(status_color(process.status)),
            Print(&status_str),
            SetForegroundColor(foreground),
            Print(&suffix),
            ResetColor,
            Print("\r\n")
        )?;
    }

    // Fill remaining space
    let drawn = app.visible.len().saturating_sub(app.scroll_offset).min(visible_rows);
    if app.visible.is_empty() && visible_rows > 0 {
        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("{:width$}\r\n", "  No processes match the filter", width = width)),
            ResetColor
        )?;
        for _ in 1..visible_rows {
            execute!(stdout, Print(format!("{:width$}\r\n", "", width = width)))?;
        }
    } else {
        for _ in drawn..visible_rows {
            execute!(stdout, Print(format!("{:width$}\r\n", "", width = width)))?;
        }
    }

    Ok(())
}
