//! Monitor core - simulated process table, resource history, and timers
//!
//! Nothing in this module touches the operating system. Data comes from a
//! `SampleSource`; state lives in a `Dashboard` owned by the caller.

pub mod dashboard;
pub mod filter;
pub mod format;
pub mod process;
pub mod registry;
pub mod sample;
pub mod scheduler;
pub mod sort;
pub mod source;
pub mod window;

pub use dashboard::{Dashboard, DashboardConfig};
pub use format::{format_megabytes, format_uptime};
pub use process::{ProcessRecord, ProcessStatus};
pub use sample::ResourceSample;
pub use sort::{SortDirection, SortField, SortSpec};
pub use source::MockSource;
pub use window::TelemetrySnapshot;
