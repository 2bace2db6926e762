//! Process record data structure

use std::fmt;

/// Scheduling state of a simulated process.
///
/// Declaration order is the ordinal order used when sorting by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProcessStatus {
    Running,
    Sleeping,
    Stopped,
    Zombie,
}

impl ProcessStatus {
    /// All statuses in ordinal order
    pub const ALL: [ProcessStatus; 4] = [
        ProcessStatus::Running,
        ProcessStatus::Sleeping,
        ProcessStatus::Stopped,
        ProcessStatus::Zombie,
    ];

    /// Lowercase label
    pub fn name(self) -> &'static str {
        match self {
            ProcessStatus::Running => "running",
            ProcessStatus::Sleeping => "sleeping",
            ProcessStatus::Stopped => "stopped",
            ProcessStatus::Zombie => "zombie",
        }
    }

    /// Whether the UI offers a resume action for this status.
    ///
    /// The registry itself resumes any status; only the front end consults this.
    pub fn is_resumable(self) -> bool {
        !matches!(self, ProcessStatus::Zombie)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the simulated process table
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    /// Process id, unique within the registry
    pub pid: u32,
    /// Process label
    pub name: String,
    /// CPU usage percentage
    pub cpu_percent: f64,
    /// Resident memory in megabytes
    pub memory_mb: f64,
    /// Owning user
    pub owner: String,
    /// Scheduling state
    pub status: ProcessStatus,
    /// Nice-style priority, 0..=19
    pub priority: u8,
    /// Time since the process started
    pub uptime_seconds: u64,
}
