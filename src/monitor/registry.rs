//! Process registry
//!
//! Owns the simulated process table. Mutations for unknown pids are silent
//! no-ops; the returned `bool` only reports whether a record was touched.

use tracing::debug;

use super::filter::ProcessFilter;
use super::process::{ProcessRecord, ProcessStatus};
use super::sort::{SortDirection, SortField, SortSpec};
use super::source::SampleSource;

#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    records: Vec<ProcessRecord>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole record set with `count` freshly generated records.
    pub fn initialize(&mut self, source: &mut dyn SampleSource, count: usize) {
        self.records = source.process_list(count);
        debug!(count = self.records.len(), "process registry initialized");
    }

    /// Overwrites load values of every record in place.
    ///
    /// Status only ever moves between running and sleeping here; stopped and
    /// zombie records keep their status.
    pub fn refresh(&mut self, source: &mut dyn SampleSource) {
        let mut toggled = 0usize;
        for record in &mut self.records {
            let load = source.process_load(record);
            record.cpu_percent = load.cpu_percent;
            record.memory_mb = load.memory_mb;

            if load.toggle_status {
                let next = match record.status {
                    ProcessStatus::Running => Some(ProcessStatus::Sleeping),
                    ProcessStatus::Sleeping => Some(ProcessStatus::Running),
                    ProcessStatus::Stopped | ProcessStatus::Zombie => None,
                };
                if let Some(status) = next {
                    record.status = status;
                    toggled += 1;
                }
            }
        }
        debug!(records = self.records.len(), toggled, "process registry refreshed");
    }

    /// Removes the record with `pid`. Returns whether one was removed.
    pub fn terminate(&mut self, pid: u32) -> bool {
        match self.records.iter().position(|r| r.pid == pid) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Marks the record with `pid` as stopped.
    pub fn suspend(&mut self, pid: u32) -> bool {
        self.set_status(pid, ProcessStatus::Stopped)
    }

    /// Marks the record with `pid` as running, whatever its current status.
    pub fn resume(&mut self, pid: u32) -> bool {
        self.set_status(pid, ProcessStatus::Running)
    }

    fn set_status(&mut self, pid: u32, status: ProcessStatus) -> bool {
        match self.records.iter_mut().find(|r| r.pid == pid) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    /// Records matching `filter`, ordered by `sort`.
    pub fn query(&self, sort: &SortSpec, filter: &ProcessFilter) -> Vec<ProcessRecord> {
        let mut result: Vec<ProcessRecord> = self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        result.sort_by(|a, b| sort.compare(a, b));
        result
    }

    /// The `n` busiest records by CPU usage.
    pub fn top_by_cpu(&self, n: usize) -> Vec<&ProcessRecord> {
        let spec = SortSpec::new(SortField::Cpu, SortDirection::Descending);
        let mut refs: Vec<&ProcessRecord> = self.records.iter().collect();
        refs.sort_by(|a, b| spec.compare(a, b));
        refs.truncate(n);
        refs
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.pid == pid)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
impl ProcessRegistry {
    pub fn from_records(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
