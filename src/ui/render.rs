//! Terminal rendering logic

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::app::App;
use crate::constants::{TOP_PROCESS_COUNT, VISIBLE_ROWS_OVERHEAD};

use super::charts::{render_history, render_top_processes};
use super::components::{
    render_column_headers, render_filter_bar, render_footer, render_header, render_system_info,
};
use super::detail_view::render_detail_view;
use super::gauges::render_gauges;
use super::help::render_help_overlay;
use super::process_list::render_process_list;

/// Number of process table rows that fit in a terminal `height` lines tall.
pub fn table_rows(height: usize) -> usize {
    height.saturating_sub(VISIBLE_ROWS_OVERHEAD)
}

/// Renders the UI to the terminal
pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let width = width as usize;
    let height = height as usize;

    execute!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;

    if app.view_mode.is_help() {
        render_help_overlay(stdout, width, height)?;
    } else if app.view_mode.is_detail_view() {
        render_detail_view(stdout, app, width, height)?;
    } else {
        render_dashboard(stdout, app, width, height)?;
    }

    stdout.flush()
}

/// Gauges, history, top processes, then the table
fn render_dashboard(stdout: &mut io::Stdout, app: &mut App, width: usize, height: usize) -> io::Result<()> {
    render_panels(stdout, app, width)?;
    render_process_list(stdout, app, table_rows(height), width)?;

    render_footer(stdout, app, width)
}

/// Everything above the process table, `DASHBOARD_HEADER_LINES` lines
fn render_panels(out: &mut impl Write, app: &App, width: usize) -> io::Result<()> {
    render_header(out, app, width)?;
    render_system_info(out, app, width)?;

    render_gauges(out, app.dashboard.latest_sample(), width)?;
    render_history(out, &app.dashboard.history(), width)?;
    render_top_processes(out, &app.dashboard.top_processes(TOP_PROCESS_COUNT), width)?;

    render_filter_bar(out, app, width)?;
    render_column_headers(out, app, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{test_app, ViewMode};
    use crate::constants::DASHBOARD_HEADER_LINES;

    fn panel_lines(app: &App) -> usize {
        let mut out = Vec::new();
        render_panels(&mut out, app, 100).expect("write to buffer");
        String::from_utf8(out).expect("utf-8 output").matches("\r\n").count()
    }

    #[test]
    fn test_header_lines_match_drawn_panels() {
        let mut app = test_app();
        assert_eq!(DASHBOARD_HEADER_LINES, 15);
        assert_eq!(panel_lines(&app), DASHBOARD_HEADER_LINES);

        // Editing or showing a filter keeps the bar on one line
        app.view_mode = ViewMode::FilterInput;
        app.filter = "ng".to_string();
        assert_eq!(panel_lines(&app), DASHBOARD_HEADER_LINES);
        app.view_mode = ViewMode::ProcessList;
        assert_eq!(panel_lines(&app), DASHBOARD_HEADER_LINES);
    }

    #[test]
    fn test_table_rows() {
        assert_eq!(table_rows(40), 40 - VISIBLE_ROWS_OVERHEAD);
        assert_eq!(table_rows(5), 0);
    }
}
