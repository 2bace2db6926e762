//! CSV export functionality

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::error::{DashboardError, DashboardResult};
use crate::monitor::ProcessRecord;

/// Generates a timestamped filename for the export
fn generate_filename() -> String {
    format!("processes_{}.csv", Local::now().format("%Y-%m-%d_%H%M%S"))
}

/// Escapes a string for CSV format
/// Wraps in quotes if contains comma, quote, or newline
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Writes processes as CSV rows, header first
pub fn write_csv<W: Write>(writer: &mut W, processes: &[ProcessRecord]) -> io::Result<()> {
    writeln!(
        writer,
        "PID,Name,CPU%,Memory(MB),Owner,Status,Priority,Uptime(s)"
    )?;

    for proc in processes {
        writeln!(
            writer,
            "{},{},{:.1},{:.0},{},{},{},{}",
            proc.pid,
            escape_csv(&proc.name),
            proc.cpu_percent,
            proc.memory_mb,
            escape_csv(&proc.owner),
            proc.status,
            proc.priority,
            proc.uptime_seconds,
        )?;
    }

    writer.flush()
}

/// Exports the process list to a CSV file in the working directory.
/// Returns the path to the exported file on success
pub fn export_to_csv(processes: &[ProcessRecord]) -> DashboardResult<PathBuf> {
    let path = PathBuf::from(generate_filename());

    let result = File::create(&path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_csv(&mut writer, processes)
    });

    match result {
        Ok(()) => {
            info!(path = %path.display(), rows = processes.len(), "processes exported");
            Ok(path)
        }
        Err(source) => Err(DashboardError::Export { path, source }),
    }
}

impl super::App {
    /// Exports the current (sorted, filtered) process list to CSV
    pub fn export_processes(&mut self) {
        match export_to_csv(&self.visible) {
            Ok(path) => {
                self.status_message = Some(format!(
                    "Exported {} processes to {}",
                    self.visible.len(),
                    path.display()
                ));
            }
            Err(e) => {
                self.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }
}
