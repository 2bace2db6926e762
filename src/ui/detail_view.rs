//! Process detail view rendering

use std::io;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::app::App;
use crate::monitor::{format_megabytes, format_uptime, ProcessRecord};

use super::utils::{cpu_color, status_color, truncate_string};

/// Builds the colored content lines for one process
fn detail_lines(process: &ProcessRecord, memory_total_mb: f64) -> Vec<(Color, String)> {
    let memory_share = if memory_total_mb > 0.0 {
        process.memory_mb / memory_total_mb * 100.0
    } else {
        0.0
    };

    vec![
        (
            Color::Yellow,
            format!("═══ Process Details: {} (PID: {}) ═══", process.name, process.pid),
        ),
        (Color::Reset, String::new()),
        (Color::Cyan, "── Basic Information ──".to_string()),
        (Color::White, format!("  Name:        {}", process.name)),
        (Color::White, format!("  PID:         {}", process.pid)),
        (Color::White, format!("  User:        {}", process.owner)),
        (status_color(process.status), format!("  Status:      {}", process.status)),
        (Color::White, format!("  Priority:    {}", process.priority)),
        (Color::White, format!("  Uptime:      {}", format_uptime(process.uptime_seconds))),
        (Color::Reset, String::new()),
        (Color::Cyan, "── Resource Usage ──".to_string()),
        (cpu_color(process.cpu_percent), format!("  CPU:         {:.1}%", process.cpu_percent)),
        (
            Color::White,
            format!(
                "  Memory:      {} ({:.1}% of total)",
                format_megabytes(process.memory_mb),
                memory_share
            ),
        ),
    ]
}

/// Renders the detailed process view
pub fn render_detail_view(
    stdout: &mut io::Stdout,
    app: &App,
    width: usize,
    height: usize,
) -> io::Result<()> {
    let process = match app.detail_record() {
        Some(p) => p,
        None => return Ok(()),
    };
    let lines = detail_lines(process, app.dashboard.system_info().memory_total_mb);

    execute!(
        stdout,
        SetBackgroundColor(Color::DarkMagenta),
        SetForegroundColor(Color::White),
        Print(format!("{:width$}", " Process Details View", width = width)),
        ResetColor,
        Print("\r\n"),
    )?;

    let visible_rows = height.saturating_sub(3);
    for (color, line) in lines.iter().take(visible_rows) {
        execute!(
            stdout,
            SetForegroundColor(*color),
            Print(format!("{:width$}", truncate_string(line, width.saturating_sub(1)), width = width)),
            ResetColor,
            Print("\r\n")
        )?;
    }
    for _ in lines.len().min(visible_rows)..visible_rows {
        execute!(stdout, Print(format!("{:width$}\r\n", "", width = width)))?;
    }

    // Status line, then key hints
    let status = app.status_message.as_deref().unwrap_or("");
    execute!(
        stdout,
        SetForegroundColor(Color::Yellow),
        Print(format!("{:width$}", format!(" {}", truncate_string(status, width.saturating_sub(2))), width = width)),
        ResetColor,
        Print("\r\n"),
        SetBackgroundColor(Color::DarkMagenta),
        SetForegroundColor(Color::White),
        Print(format!("{:width$}", truncate_string(app.view_mode.key_hint(), width), width = width)),
        ResetColor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::source::testing::record;
    use crate::monitor::ProcessStatus;

    #[test]
    fn test_detail_lines_content() {
        let process = record(1001, "nginx", 9.0, ProcessStatus::Sleeping);
        let lines = detail_lines(&process, 1000.0);
        let text: Vec<&str> = lines.iter().map(|(_, l)| l.as_str()).collect();

        assert!(text[0].contains("nginx (PID: 1001)"));
        assert!(text.contains(&"  Status:      sleeping"));
        assert!(text.contains(&"  Memory:      100 MB (10.0% of total)"));
        assert!(text.contains(&"  Uptime:      1m"));
    }

    #[test]
    fn test_detail_lines_zero_total_memory() {
        let process = record(1, "init", 0.0, ProcessStatus::Running);
        let lines = detail_lines(&process, 0.0);
        assert!(lines.iter().any(|(_, l)| l.contains("(0.0% of total)")));
    }
}
