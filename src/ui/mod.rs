//! User interface rendering
//!
//! This module provides all terminal UI rendering functionality:
//! - `render` - Main rendering entry point
//! - `components` - Header, system info, filter bar, column headers, footer
//! - `gauges` - CPU, memory, disk and network gauges
//! - `charts` - History sparklines and top CPU consumers
//! - `process_list` - Process table rendering
//! - `detail_view` - Detailed process information view
//! - `help` - Help overlay
//! - `utils` - Shared utilities

mod charts;
mod components;
mod detail_view;
mod gauges;
mod help;
mod process_list;
mod render;
mod utils;

pub use render::{render, table_rows};
