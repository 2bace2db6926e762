//! Sorting options for the process list

use std::cmp::Ordering;
use std::str::FromStr;

use super::process::ProcessRecord;

/// Sortable process table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Pid,
    Name,
    Cpu,
    Memory,
    Owner,
    Status,
    Priority,
}

impl SortField {
    /// Columns in table order
    pub const ALL: [SortField; 7] = [
        SortField::Pid,
        SortField::Name,
        SortField::Cpu,
        SortField::Memory,
        SortField::Owner,
        SortField::Status,
        SortField::Priority,
    ];

    /// Cycle to the next sort option
    pub fn next(self) -> Self {
        match self {
            SortField::Pid => SortField::Name,
            SortField::Name => SortField::Cpu,
            SortField::Cpu => SortField::Memory,
            SortField::Memory => SortField::Owner,
            SortField::Owner => SortField::Status,
            SortField::Status => SortField::Priority,
            SortField::Priority => SortField::Pid,
        }
    }

    /// Get display name for the sort column
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Pid => "PID",
            SortField::Name => "Process",
            SortField::Cpu => "CPU%",
            SortField::Memory => "Memory",
            SortField::Owner => "User",
            SortField::Status => "Status",
            SortField::Priority => "Priority",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pid" => Ok(SortField::Pid),
            "name" => Ok(SortField::Name),
            "cpu" => Ok(SortField::Cpu),
            "memory" | "mem" => Ok(SortField::Memory),
            "owner" | "user" => Ok(SortField::Owner),
            "status" => Ok(SortField::Status),
            "priority" | "prio" => Ok(SortField::Priority),
            _ => Err(format!(
                "invalid sort column '{}'. Valid values: pid, name, cpu, memory, owner, status, priority",
                s
            )),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The single active field and direction governing process ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Cpu,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Applies a column request: the active column flips direction,
    /// any other column becomes active in ascending order.
    pub fn request(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Orders two records by the active column and direction.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        let cmp = match self.field {
            SortField::Pid => a.pid.cmp(&b.pid),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Cpu => a
                .cpu_percent
                .partial_cmp(&b.cpu_percent)
                .unwrap_or(Ordering::Equal),
            SortField::Memory => a
                .memory_mb
                .partial_cmp(&b.memory_mb)
                .unwrap_or(Ordering::Equal),
            SortField::Owner => a.owner.cmp(&b.owner),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Priority => a.priority.cmp(&b.priority),
        };
        match self.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    }
}
