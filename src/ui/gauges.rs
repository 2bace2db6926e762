//! Resource gauges: CPU, memory, disk and network

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::constants::GAUGE_BAR_WIDTH;
use crate::monitor::{format_megabytes, ResourceSample};

use super::utils::{core_cells, gauge_bar, usage_color};

/// Renders the five gauge lines for the latest resource sample.
pub fn render_gauges(stdout: &mut impl Write, sample: &ResourceSample, width: usize) -> io::Result<()> {
    render_gauge_line(
        stdout,
        "CPU",
        sample.cpu_total_percent,
        format!("{:5.1}%", sample.cpu_total_percent),
        width,
    )?;
    render_core_strip(stdout, sample, width)?;
    render_gauge_line(
        stdout,
        "Memory",
        sample.memory_percent,
        format!(
            "{:5.1}%  {} / {}",
            sample.memory_percent,
            format_megabytes(sample.memory_used_mb),
            format_megabytes(sample.memory_total_mb)
        ),
        width,
    )?;
    render_gauge_line(
        stdout,
        "Disk",
        sample.disk_usage_percent,
        format!(
            "{:5.1}%  R {:.1} MB/s  W {:.1} MB/s",
            sample.disk_usage_percent, sample.disk_read_mbps, sample.disk_write_mbps
        ),
        width,
    )?;

    execute!(
        stdout,
        SetForegroundColor(Color::Magenta),
        Print(format!("{:width$}", network_line(sample), width = width)),
        ResetColor,
        Print("\r\n")
    )
}

/// Download and upload throughput in megabytes per second
fn network_line(sample: &ResourceSample) -> String {
    format!(
        " {:<8} ↓ {:.1} MB/s   ↑ {:.1} MB/s",
        "Network", sample.network_download_mbps, sample.network_upload_mbps
    )
}

/// One labelled bar colored by usage level
fn render_gauge_line(
    stdout: &mut impl Write,
    label: &str,
    percent: f64,
    detail: String,
    width: usize,
) -> io::Result<()> {
    let label = format!(" {:<8}", label);
    let bar = gauge_bar(percent, GAUGE_BAR_WIDTH);
    let detail = format!(" {}", detail);
    let used = label.chars().count() + bar.chars().count();

    execute!(
        stdout,
        Print(&label),
        SetForegroundColor(usage_color(percent)),
        Print(&bar),
        ResetColor,
        Print(format!("{:width$}", detail, width = width.saturating_sub(used))),
        Print("\r\n")
    )
}

/// Per-core load as one block character per core
fn render_core_strip(stdout: &mut impl Write, sample: &ResourceSample, width: usize) -> io::Result<()> {
    let line = format!(
        " {:<8} {}  ({} cores)",
        "Cores",
        core_cells(&sample.cpu_per_core),
        sample.cpu_per_core.len()
    );
    execute!(
        stdout,
        SetForegroundColor(usage_color(sample.cpu_total_percent)),
        Print(format!("{:width$}", line, width = width)),
        ResetColor,
        Print("\r\n")
    )
}
