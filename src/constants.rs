//! Centralized constants for the application
//!
//! This module contains all magic numbers and configuration defaults
//! used throughout the dashboard, making them easy to find and modify.

// ============================================================================
// Application Info
// ============================================================================

/// Application name displayed in header
pub const DISPLAY_NAME: &str = "Processes Monitor";

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tick Intervals (milliseconds)
// ============================================================================

/// Default interval between process list refreshes
pub const DEFAULT_PROCESS_TICK_MS: u64 = 3000;

/// Default interval between resource samples
pub const DEFAULT_RESOURCE_TICK_MS: u64 = 2000;

/// Minimum allowed tick interval
pub const MIN_TICK_MS: u64 = 250;

/// Maximum allowed tick interval
pub const MAX_TICK_MS: u64 = 10000;

// ============================================================================
// Simulation
// ============================================================================

/// Number of slots kept in the telemetry history
pub const DEFAULT_HISTORY_LEN: usize = 30;

/// Largest accepted history length
pub const MAX_HISTORY_LEN: u64 = 3600;

/// Number of synthetic processes created at startup
pub const DEFAULT_PROCESS_COUNT: usize = 20;

/// Largest accepted process count
pub const MAX_PROCESS_COUNT: u64 = 10_000;

/// Number of simulated CPU cores
pub const DEFAULT_CPU_CORES: usize = 8;

/// Largest accepted core count
pub const MAX_CPU_CORES: u64 = 256;

/// Simulated physical memory (16 GB)
pub const DEFAULT_MEMORY_TOTAL_MB: f64 = 16.0 * 1024.0;

/// First pid handed out by the mock source
pub const FIRST_MOCK_PID: u32 = 1000;

/// Probability that a refresh flips a process between running and sleeping
pub const STATUS_TOGGLE_PROBABILITY: f64 = 0.1;

/// Number of processes in the "top CPU" panel
pub const TOP_PROCESS_COUNT: usize = 5;

// ============================================================================
// Navigation
// ============================================================================

/// CPU, core strip, memory, disk and network
pub const GAUGE_LINES: usize = 5;

/// Four sparklines plus the time axis
pub const HISTORY_LINES: usize = 5;

/// Lines above the process table: title, system info, gauges, history,
/// top CPU, filter bar and column headers
pub const DASHBOARD_HEADER_LINES: usize = 1 + 1 + GAUGE_LINES + HISTORY_LINES + 1 + 1 + 1;

/// Lines below the process table (status and key hints)
pub const DASHBOARD_FOOTER_LINES: usize = 2;

/// Lines subtracted from terminal height to calculate visible table rows
pub const VISIBLE_ROWS_OVERHEAD: usize = DASHBOARD_HEADER_LINES + DASHBOARD_FOOTER_LINES;

/// Poll timeout used when no timer is armed
pub const IDLE_POLL_MS: u64 = 250;

// ============================================================================
// Byte Size Conversions
// ============================================================================

/// Megabytes in a gigabyte
pub const MB_PER_GB: f64 = 1024.0;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Width of the help dialog box
pub const HELP_DIALOG_WIDTH: usize = 52;

/// Width of the key column in help dialog
pub const HELP_KEY_COL_WIDTH: usize = 14;

/// Width of a gauge bar in characters
pub const GAUGE_BAR_WIDTH: usize = 20;

// ============================================================================
// Usage Thresholds (for coloring)
// ============================================================================

/// Usage threshold for red color (critical)
pub const USAGE_THRESHOLD_CRITICAL: f64 = 80.0;

/// Usage threshold for yellow color (warning)
pub const USAGE_THRESHOLD_WARNING: f64 = 50.0;

/// Per-process CPU threshold for cyan color (moderate)
pub const CPU_THRESHOLD_MODERATE: f64 = 5.0;
