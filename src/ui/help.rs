//! Help overlay rendering

use std::io;

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::constants::{HELP_DIALOG_WIDTH, HELP_KEY_COL_WIDTH};

/// Help content definition
const HELP_LINES: &[(&str, &str)] = &[
    ("", ""),
    ("NAVIGATION", ""),
    ("  Up/Down", "Move selection up/down"),
    ("  PgUp/PgDn", "Scroll by page"),
    ("  Home/End", "Jump to first/last process"),
    ("  Enter", "View process details"),
    ("", ""),
    ("PROCESS ACTIONS", ""),
    ("  k", "Terminate selected process"),
    ("  p", "Suspend/Resume process"),
    ("", ""),
    ("VIEW OPTIONS", ""),
    ("  s", "Cycle sort column"),
    ("  1-7", "Sort by column (again: reverse)"),
    ("  r", "Reverse sort order"),
    ("  /", "Filter by name, user or PID"),
    ("  Esc", "Clear filter"),
    ("", ""),
    ("OTHER", ""),
    ("  e", "Export to CSV file"),
    ("  ?", "Show/hide this help"),
    ("  q", "Quit application"),
    ("  Ctrl+C", "Quit application"),
];

/// Pads `content` to exactly `width` characters
fn fit(content: &str, width: usize) -> String {
    let padded = format!("{:<w$}", content, w = width);
    padded.chars().take(width).collect()
}

/// Builds the full dialog, borders included, one colored row per line.
fn dialog_rows(inner_width: usize) -> Vec<(Color, String)> {
    let title = "Keyboard Shortcuts";
    let title_pad = inner_width.saturating_sub(title.len()) / 2;

    let mut rows = vec![
        (Color::White, format!("┌{}┐", "─".repeat(inner_width))),
        (
            Color::Yellow,
            format!("│{}│", fit(&format!("{:pad$}{}", "", title, pad = title_pad), inner_width)),
        ),
        (Color::White, format!("├{}┤", "─".repeat(inner_width))),
    ];

    for (key, desc) in HELP_LINES {
        let (color, content) = if desc.is_empty() && key.is_empty() {
            (Color::White, String::new())
        } else if desc.is_empty() {
            (Color::Cyan, format!(" {}", key))
        } else {
            (Color::Green, format!(" {:<kw$}{}", key, desc, kw = HELP_KEY_COL_WIDTH))
        };
        rows.push((color, format!("│{}│", fit(&content, inner_width))));
    }

    let hint = " Press any key to close ";
    let left = inner_width.saturating_sub(hint.len()) / 2;
    let right = inner_width.saturating_sub(left + hint.len());
    rows.push((
        Color::White,
        format!("└{}{}{}┘", "─".repeat(left), hint, "─".repeat(right)),
    ));
    rows
}

/// Renders the help overlay showing all keyboard shortcuts
pub fn render_help_overlay(stdout: &mut io::Stdout, width: usize, height: usize) -> io::Result<()> {
    let rows = dialog_rows(HELP_DIALOG_WIDTH - 2);
    let start_x = width.saturating_sub(HELP_DIALOG_WIDTH) / 2;
    let start_y = height.saturating_sub(rows.len()) / 2;

    // Dim the whole screen behind the dialog
    for y in 0..height {
        execute!(
            stdout,
            MoveTo(0, y as u16),
            SetBackgroundColor(Color::Black),
            Print(format!("{:w$}", "", w = width)),
            ResetColor
        )?;
    }

    for (i, (color, row)) in rows.iter().take(height).enumerate() {
        execute!(
            stdout,
            MoveTo(start_x as u16, (start_y + i) as u16),
            SetBackgroundColor(Color::DarkBlue),
            SetForegroundColor(*color),
            Print(row),
            ResetColor
        )?;
    }

    Ok(())
}
