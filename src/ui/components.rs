//! Header, system info strip, filter bar, column headers, and footer components

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::app::{App, ViewMode};
use crate::constants::{APP_VERSION, DISPLAY_NAME};
use crate::monitor::{format_megabytes, SortField, SortSpec};

use super::utils::truncate_string;

/// Renders the application header with the simulated host identity.
pub fn render_header(stdout: &mut impl Write, app: &App, width: usize) -> io::Result<()> {
    let info = app.dashboard.system_info();
    let title = format!(" {} v{}", DISPLAY_NAME, APP_VERSION);
    let host = format!("{} ({}) ", info.hostname, info.platform);
    let spacing = width.saturating_sub(title.len() + host.len());

    execute!(
        stdout,
        SetBackgroundColor(Color::DarkBlue),
        SetForegroundColor(Color::White),
        Print(title),
        Print(format!("{:spacing$}", "", spacing = spacing)),
        SetForegroundColor(Color::Cyan),
        Print(host),
        ResetColor,
        Print("\r\n")
    )
}

/// Renders the system information line.
///
/// Shows the CPU model, core count, total memory, uptime, process count
/// and the current sort column.
pub fn render_system_info(stdout: &mut impl Write, app: &App, width: usize) -> io::Result<()> {
    let info = app.dashboard.system_info();
    let sort = app.dashboard.sort();
    let line = format!(
        " {} ({} cores)  |  RAM: {}  |  Up: {}  |  {}  |  Sort: {} {}",
        info.cpu_model,
        info.cpu_cores,
        format_megabytes(info.memory_total_mb),
        info.uptime,
        app.process_count_label(),
        sort.field.name(),
        sort.direction.arrow(),
    );

    execute!(
        stdout,
        SetForegroundColor(Color::Cyan),
        Print(format!("{:width$}", truncate_string(&line, width), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

/// Renders the filter bar when active or showing current filter.
///
/// In filter mode, displays an input field with cursor.
/// Otherwise, shows the current filter value if set.
pub fn render_filter_bar(stdout: &mut impl Write, app: &App, width: usize) -> io::Result<()> {
    if app.view_mode.is_filter_input() {
        execute!(
            stdout,
            SetBackgroundColor(Color::DarkYellow),
            SetForegroundColor(Color::Black),
            Print(format!(
                " Filter: {}█{:width$}",
                app.filter,
                "",
                width = width.saturating_sub(app.filter.chars().count() + 10)
            )),
            ResetColor,
            Print("\r\n")
        )
    } else if !app.filter.is_empty() {
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print(format!(
                " Filter: \"{}\" (press / to edit, Esc to clear)",
                app.filter
            )),
            ResetColor,
            Print("\r\n")
        )
    } else {
        execute!(stdout, Print("\r\n"))
    }
}

/// Builds the column header text, marking the active sort column.
pub fn column_header_line(sort: SortSpec) -> String {
    let label = |field: SortField| -> String {
        if field == sort.field {
            format!("{}{}", field.name(), sort.direction.arrow())
        } else {
            field.name().to_string()
        }
    };

    format!(
        " {:>8}  {:<20}  {:>7}  {:>10}  {:<10}  {:<9}  {:>9}  {:>10}",
        label(SortField::Pid),
        label(SortField::Name),
        label(SortField::Cpu),
        label(SortField::Memory),
        label(SortField::Owner),
        label(SortField::Status),
        label(SortField::Priority),
        "Uptime",
    )
}

/// Renders the column headers for the process table.
pub fn render_column_headers(stdout: &mut impl Write, app: &App, width: usize) -> io::Result<()> {
    let header = column_header_line(app.dashboard.sort());
    execute!(
        stdout,
        SetBackgroundColor(Color::DarkGrey),
        SetForegroundColor(Color::White),
        Print(format!("{:width$}", truncate_string(&header, width), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

/// Renders the footer with status messages and key hints.
///
/// Shows the terminate confirmation when in confirm mode,
/// the last status message when present, or keyboard shortcuts otherwise.
pub fn render_footer(stdout: &mut impl Write, app: &App, width: usize) -> io::Result<()> {
    if app.view_mode.is_confirm_kill() {
        if let (Some(pid), Some(ref name)) = (app.pending_kill_pid, &app.pending_kill_name) {
            let prompt = format!(" Terminate '{}' (PID {})? [Y/N]", truncate_string(name, 30), pid);
            execute!(
                stdout,
                SetBackgroundColor(Color::DarkRed),
                SetForegroundColor(Color::White),
                Print(format!("{:width$}", prompt, width = width)),
                ResetColor,
                Print("\r\n")
            )?;
        } else {
            execute!(stdout, Print("\r\n"))?;
        }
    } else if let Some(ref msg) = app.status_message {
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print(format!(" {}", truncate_string(msg, width.saturating_sub(2)))),
            ResetColor,
            Print("\r\n")
        )?;
    } else {
        let selected = app
            .selected()
            .map(|p| format!(" Selected: {} (PID {}, owner {})", p.name, p.pid, p.owner))
            .unwrap_or_else(|| " No process selected".to_string());
        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print(format!("{:width$}", truncate_string(&selected, width), width = width)),
            ResetColor,
            Print("\r\n")
        )?;
    }

    let (background, foreground) = match app.view_mode {
        ViewMode::ConfirmKill => (Color::DarkRed, Color::White),
        ViewMode::FilterInput => (Color::DarkYellow, Color::Black),
        _ => (Color::DarkBlue, Color::White),
    };
    execute!(
        stdout,
        SetBackgroundColor(background),
        SetForegroundColor(foreground),
        Print(format!("{:width$}", truncate_string(app.view_mode.key_hint(), width), width = width)),
        ResetColor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::SortDirection;

    #[test]
    fn test_header_marks_only_active_column() {
        let line = column_header_line(SortSpec::new(SortField::Memory, SortDirection::Ascending));
        assert!(line.contains("Memory↑"));
        assert!(!line.contains("CPU%↓"));
        assert!(line.contains("Uptime"));

        let line = column_header_line(SortSpec::default());
        assert!(line.contains(&format!("{}↓", SortField::Cpu.name())));
    }
}
