//! Dashboard instance
//!
//! Owns every piece of mutable monitor state. The event loop drives it with
//! `tick`; the UI reads it through `processes`, `history`, and
//! `latest_sample`, and sends commands through the action methods.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::constants::{
    DEFAULT_CPU_CORES, DEFAULT_HISTORY_LEN, DEFAULT_MEMORY_TOTAL_MB, DEFAULT_PROCESS_COUNT,
    DEFAULT_PROCESS_TICK_MS, DEFAULT_RESOURCE_TICK_MS,
};
use crate::error::ConfigError;

use super::filter::ProcessFilter;
use super::process::ProcessRecord;
use super::registry::ProcessRegistry;
use super::sample::{ResourceSample, SystemInfo};
use super::scheduler::{Scheduler, Ticks};
use super::sort::{SortField, SortSpec};
use super::source::SampleSource;
use super::window::{TelemetrySnapshot, TelemetryWindow};

/// Settings for one dashboard instance
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub process_interval: Duration,
    pub resource_interval: Duration,
    pub history_len: usize,
    pub process_count: usize,
    pub cpu_cores: usize,
    pub memory_total_mb: f64,
    pub sort: SortSpec,
    pub filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            process_interval: Duration::from_millis(DEFAULT_PROCESS_TICK_MS),
            resource_interval: Duration::from_millis(DEFAULT_RESOURCE_TICK_MS),
            history_len: DEFAULT_HISTORY_LEN,
            process_count: DEFAULT_PROCESS_COUNT,
            cpu_cores: DEFAULT_CPU_CORES,
            memory_total_mb: DEFAULT_MEMORY_TOTAL_MB,
            sort: SortSpec::default(),
            filter: String::new(),
        }
    }
}

impl DashboardConfig {
    /// Rejects settings the dashboard cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.process_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { timer: "process" });
        }
        if self.resource_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { timer: "resource" });
        }
        if self.history_len == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if self.cpu_cores == 0 {
            return Err(ConfigError::NoCores);
        }
        if !(self.memory_total_mb.is_finite() && self.memory_total_mb > 0.0) {
            return Err(ConfigError::InvalidMemory(self.memory_total_mb));
        }
        Ok(())
    }
}

pub struct Dashboard {
    source: Box<dyn SampleSource>,
    registry: ProcessRegistry,
    window: TelemetryWindow,
    latest: ResourceSample,
    scheduler: Scheduler,
    sort: SortSpec,
    filter: ProcessFilter,
    system_info: SystemInfo,
}

impl Dashboard {
    /// Builds the registry and takes an initial resource sample.
    ///
    /// The history starts zero-filled; the first real slot arrives with the
    /// first resource tick.
    pub fn new(config: &DashboardConfig, mut source: Box<dyn SampleSource>) -> Self {
        let mut registry = ProcessRegistry::new();
        registry.initialize(source.as_mut(), config.process_count);
        let latest = source.resource_sample();

        Self {
            source,
            registry,
            window: TelemetryWindow::new(config.history_len),
            latest,
            scheduler: Scheduler::new(config.process_interval, config.resource_interval),
            sort: config.sort,
            filter: ProcessFilter::new(config.filter.clone()),
            system_info: SystemInfo::simulated(config.cpu_cores, config.memory_total_mb),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn start(&mut self, now: Instant) {
        self.scheduler.start(now);
        info!(processes = self.registry.len(), "dashboard started");
    }

    /// Cancels both timers. Safe to call more than once.
    pub fn stop(&mut self) {
        if self.scheduler.is_running() {
            info!("dashboard stopped");
        }
        self.scheduler.stop();
    }

    /// Time until the next timer is due, `None` when stopped
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }

    /// Runs whichever ticks are due now.
    pub fn tick(&mut self) -> Ticks {
        self.tick_at(Instant::now(), Local::now())
    }

    /// Runs whichever ticks are due at `now`, stamping history with `wall_clock`.
    pub fn tick_at(&mut self, now: Instant, wall_clock: DateTime<Local>) -> Ticks {
        let ticks = self.scheduler.poll(now);

        if ticks.process {
            self.registry.refresh(self.source.as_mut());
        }

        if ticks.resource {
            let sample = self.source.resource_sample();
            self.window.append(&sample, wall_clock);
            debug!(
                cpu = sample.cpu_total_percent,
                memory = sample.memory_percent,
                "resource sample recorded"
            );
            self.latest = sample;
        }

        ticks
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn terminate(&mut self, pid: u32) -> bool {
        let removed = self.registry.terminate(pid);
        if removed {
            info!(pid, "process terminated");
        } else {
            debug!(pid, "terminate ignored, no such process");
        }
        removed
    }

    pub fn suspend(&mut self, pid: u32) -> bool {
        let changed = self.registry.suspend(pid);
        if changed {
            info!(pid, "process suspended");
        } else {
            debug!(pid, "suspend ignored, no such process");
        }
        changed
    }

    pub fn resume(&mut self, pid: u32) -> bool {
        let changed = self.registry.resume(pid);
        if changed {
            info!(pid, "process resumed");
        } else {
            debug!(pid, "resume ignored, no such process");
        }
        changed
    }

    /// Requests a sort column (same column flips direction).
    pub fn set_sort(&mut self, field: SortField) {
        self.sort.request(field);
        debug!(field = field.name(), direction = ?self.sort.direction, "sort changed");
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter = ProcessFilter::new(text);
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Current records, filtered and sorted
    pub fn processes(&self) -> Vec<ProcessRecord> {
        self.registry.query(&self.sort, &self.filter)
    }

    pub fn history(&self) -> TelemetrySnapshot {
        self.window.snapshot()
    }

    pub fn latest_sample(&self) -> &ResourceSample {
        &self.latest
    }

    pub fn top_processes(&self, n: usize) -> Vec<&ProcessRecord> {
        self.registry.top_by_cpu(n)
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn filter(&self) -> &ProcessFilter {
        &self.filter
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn system_info(&self) -> &SystemInfo {
        &self.system_info
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.stop();
    }
}
