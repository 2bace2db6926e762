//! Terminal system-monitoring dashboard
//!
//! Shows a simulated process table, resource gauges and a rolling history
//! of CPU, memory and disk samples. All data comes from a random sample
//! source; nothing is read from or sent to the operating system.
//!
//! Controls:
//! - q: Quit
//! - k: Terminate selected process (with confirmation)
//! - p: Suspend/Resume selected process
//! - s: Cycle sort column
//! - 1-7: Sort by column, again to reverse
//! - r: Reverse sort order
//! - /: Filter by name, user or PID
//! - e: Export to CSV
//! - ↑/↓: Navigate process list
//! - PgUp/PgDown: Scroll by page
//! - Home/End: Jump to start/end

mod app;
mod constants;
mod error;
mod logging;
mod monitor;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;

use app::cli::Args;
use app::export::export_to_csv;
use app::{App, KeyAction};
use constants::{APP_VERSION, IDLE_POLL_MS};
use error::DashboardResult;
use logging::{init_logging, LogTarget};
use monitor::{Dashboard, MockSource};
use ui::{render, table_rows};

fn main() -> DashboardResult<()> {
    let settings = Args::parse().into_settings()?;

    let target = match (&settings.log_file, settings.export) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    init_logging(target, settings.verbose)?;
    info!(version = APP_VERSION, seed = ?settings.seed, "starting dashboard");

    let source = MockSource::new(
        settings.dashboard.cpu_cores,
        settings.dashboard.memory_total_mb,
        settings.seed,
    );
    let dashboard = Dashboard::new(&settings.dashboard, Box::new(source));

    if settings.export {
        let path = export_to_csv(&dashboard.processes())?;
        println!("Exported processes to {}", path.display());
        return Ok(());
    }

    run_interactive(dashboard)
}

/// Takes over the terminal, runs the event loop, then restores the terminal
/// whether or not setup or the loop failed.
fn run_interactive(dashboard: Dashboard) -> DashboardResult<()> {
    let mut stdout = io::stdout();
    let mut app = App::new(dashboard);

    let result = with_restore(
        &mut stdout,
        |out| {
            terminal::enable_raw_mode()?;
            execute!(out, EnterAlternateScreen, DisableLineWrap, Hide)
        },
        |out| {
            app.dashboard.start(Instant::now());
            let result = event_loop(out, &mut app);
            app.dashboard.stop();
            result
        },
        restore_terminal,
    );

    info!("dashboard closed");
    result.map_err(Into::into)
}

/// Runs `enter`, then `body` if it succeeded, then always `leave`.
///
/// The first error wins; a `leave` error is only reported when everything
/// before it succeeded.
fn with_restore<S, T>(
    state: &mut S,
    enter: impl FnOnce(&mut S) -> io::Result<()>,
    body: impl FnOnce(&mut S) -> io::Result<T>,
    leave: impl FnOnce(&mut S) -> io::Result<()>,
) -> io::Result<T> {
    let result = enter(state).and_then(|()| body(state));
    let restored = leave(state);
    let value = result?;
    restored?;
    Ok(value)
}

/// Leaves the alternate screen and raw mode, attempting both even if the
/// first fails.
fn restore_terminal(stdout: &mut io::Stdout) -> io::Result<()> {
    let screen = execute!(stdout, Show, EnableLineWrap, LeaveAlternateScreen);
    let raw = terminal::disable_raw_mode();
    screen.and(raw)
}

/// Renders, waits for a key or the next timer deadline, then runs due ticks.
fn event_loop(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    loop {
        render(stdout, app)?;

        let timeout = app
            .dashboard
            .time_until_next_tick(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only handle key PRESS events, ignore Release and Repeat
                if key_event.kind == KeyEventKind::Press {
                    let (_, height) = terminal::size()?;
                    let page = table_rows(height as usize);
                    if app.handle_key(key_event.code, key_event.modifiers, page) == KeyAction::Exit {
                        return Ok(());
                    }
                }
            }
        }

        app.on_tick();
    }
}
