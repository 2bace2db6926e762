//! Application state and logic
//!
//! This module contains the interactive layer of the dashboard:
//! - `state` - Core App struct wrapping the monitor `Dashboard`
//! - `view_mode` - ViewMode enum for mutually exclusive UI states
//! - `cli` - Command-line argument parsing
//! - `input` - Keyboard event handling
//! - `navigation` - List navigation methods
//! - `process_ops` - Terminate/suspend/resume actions
//! - `detail_view` - Detail view management
//! - `export` - CSV export functionality

pub mod cli;
mod detail_view;
pub mod export;
mod input;
mod navigation;
mod process_ops;
mod state;
mod view_mode;

pub use input::KeyAction;
pub use state::App;
pub use view_mode::ViewMode;

#[cfg(test)]
pub(crate) use state::tests::test_app;
