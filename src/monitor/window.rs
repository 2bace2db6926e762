//! Rolling telemetry history
//!
//! A fixed-length FIFO of derived resource metrics. The window is pre-filled
//! with zero slots so charts always have `capacity` points; every append
//! evicts the oldest slot.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::sample::ResourceSample;

/// One history slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySlot {
    /// `None` for the startup sentinel slots
    pub timestamp: Option<DateTime<Local>>,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_read_mbps: f64,
    pub disk_write_mbps: f64,
}

impl TelemetrySlot {
    fn from_sample(sample: &ResourceSample, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp: Some(timestamp),
            cpu_percent: sample.cpu_total_percent,
            memory_percent: sample.memory_percent,
            disk_read_mbps: sample.disk_read_mbps,
            disk_write_mbps: sample.disk_write_mbps,
        }
    }
}

/// Parallel, oldest-first series of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub timestamps: Vec<Option<DateTime<Local>>>,
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk_read: Vec<f64>,
    pub disk_write: Vec<f64>,
}

impl TelemetrySnapshot {
    /// `HH:MM:SS` axis labels, empty for sentinel slots
    pub fn labels(&self) -> Vec<String> {
        self.timestamps
            .iter()
            .map(|ts| {
                ts.map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryWindow {
    slots: VecDeque<TelemetrySlot>,
    capacity: usize,
}

impl TelemetryWindow {
    /// Allocates `capacity` zero-valued slots.
    pub fn new(capacity: usize) -> Self {
        let slots = std::iter::repeat(TelemetrySlot::default())
            .take(capacity)
            .collect();
        Self { slots, capacity }
    }

    /// Evicts the oldest slot and appends the new one at the newest end.
    pub fn append(&mut self, sample: &ResourceSample, timestamp: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }
        self.slots.pop_front();
        self.slots
            .push_back(TelemetrySlot::from_sample(sample, timestamp));
    }

    /// Copies the window into parallel series, oldest first.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        let mut snapshot = TelemetrySnapshot {
            timestamps: Vec::with_capacity(self.capacity),
            cpu: Vec::with_capacity(self.capacity),
            memory: Vec::with_capacity(self.capacity),
            disk_read: Vec::with_capacity(self.capacity),
            disk_write: Vec::with_capacity(self.capacity),
        };
        for slot in &self.slots {
            snapshot.timestamps.push(slot.timestamp);
            snapshot.cpu.push(slot.cpu_percent);
            snapshot.memory.push(slot.memory_percent);
            snapshot.disk_read.push(slot.disk_read_mbps);
            snapshot.disk_write.push(slot.disk_write_mbps);
        }
        snapshot
    }
}

#[cfg(test)]
impl TelemetrySnapshot {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
impl TelemetryWindow {
    pub fn latest(&self) -> Option<&TelemetrySlot> {
        self.slots.back()
    }
}
