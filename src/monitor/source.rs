//! Synthetic data sources
//!
//! The dashboard never inspects the host. Everything it shows comes from a
//! `SampleSource`, which in production is the random `MockSource`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::constants::{FIRST_MOCK_PID, STATUS_TOGGLE_PROBABILITY};

use super::process::{ProcessRecord, ProcessStatus};
use super::sample::{round1, ResourceReadings, ResourceSample};

/// Fresh per-process load values applied on a process tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessLoad {
    pub cpu_percent: f64,
    pub memory_mb: f64,
    /// Flip between running and sleeping (ignored for other statuses)
    pub toggle_status: bool,
}

/// Producer of process lists and resource samples
pub trait SampleSource {
    /// Generates `count` process records with unique pids
    fn process_list(&mut self, count: usize) -> Vec<ProcessRecord>;

    /// Generates new load values for an existing record
    fn process_load(&mut self, record: &ProcessRecord) -> ProcessLoad;

    /// Generates one resource snapshot
    fn resource_sample(&mut self) -> ResourceSample;
}

const PROCESS_NAMES: &[&str] = &[
    "chrome", "firefox", "safari", "edge", "vscode", "terminal", "finder", "explorer", "spotify",
    "slack", "discord", "zoom", "systemd", "kernel", "sshd", "nginx", "python", "node", "java",
    "docker",
];

const OWNERS: &[&str] = &["root", "admin", "system", "user"];

/// Random sample source
pub struct MockSource {
    rng: StdRng,
    cpu_cores: usize,
    memory_total_mb: f64,
}

impl MockSource {
    /// Creates a source seeded from the OS, or from `seed` for reproducible runs.
    pub fn new(cpu_cores: usize, memory_total_mb: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            cpu_cores,
            memory_total_mb,
        }
    }

    fn cpu_load(&mut self) -> f64 {
        round1(self.rng.gen_range(0.0..15.0))
    }

    fn memory_load(&mut self) -> f64 {
        self.rng.gen_range(0.0_f64..500.0).round()
    }

    fn pick(&mut self, values: &[&str]) -> String {
        values.choose(&mut self.rng).copied().unwrap_or_default().to_string()
    }
}

impl SampleSource for MockSource {
    fn process_list(&mut self, count: usize) -> Vec<ProcessRecord> {
        // Pids run up from FIRST_MOCK_PID and stop at u32::MAX
        (FIRST_MOCK_PID..=u32::MAX)
            .take(count)
            .map(|pid| {
                let status = ProcessStatus::ALL[self.rng.gen_range(0..ProcessStatus::ALL.len())];
                ProcessRecord {
                    pid,
                    name: self.pick(PROCESS_NAMES),
                    cpu_percent: self.cpu_load(),
                    memory_mb: self.memory_load(),
                    owner: self.pick(OWNERS),
                    status,
                    priority: self.rng.gen_range(0..20),
                    uptime_seconds: self.rng.gen_range(0..24) * 3600 + self.rng.gen_range(0..60) * 60,
                }
            })
            .collect()
    }

    fn process_load(&mut self, _record: &ProcessRecord) -> ProcessLoad {
        ProcessLoad {
            cpu_percent: self.cpu_load(),
            memory_mb: self.memory_load(),
            toggle_status: self.rng.gen_bool(STATUS_TOGGLE_PROBABILITY),
        }
    }

    fn resource_sample(&mut self) -> ResourceSample {
        let cpu_per_core = (0..self.cpu_cores)
            .map(|_| round1(self.rng.gen_range(0.0..100.0)))
            .collect();
        let memory_used_mb = if self.memory_total_mb > 0.0 {
            self.rng.gen_range(0.0..self.memory_total_mb).floor()
        } else {
            0.0
        };

        ResourceSample::from_readings(ResourceReadings {
            cpu_per_core,
            memory_used_mb,
            memory_total_mb: self.memory_total_mb,
            disk_read_mbps: round1(self.rng.gen_range(0.0..100.0)),
            disk_write_mbps: round1(self.rng.gen_range(0.0..80.0)),
            disk_usage_percent: round1(self.rng.gen_range(0.0..85.0)),
            network_download_mbps: round1(self.rng.gen_range(0.0..10.0)),
            network_upload_mbps: round1(self.rng.gen_range(0.0..5.0)),
        })
    }
}

/// Deterministic source for tests
#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Replays queued values; falls back to fixed defaults when a queue is empty.
    #[derive(Default)]
    pub struct ScriptedSource {
        pub processes: Vec<ProcessRecord>,
        pub loads: VecDeque<ProcessLoad>,
        pub samples: VecDeque<ResourceSample>,
        pub process_list_calls: usize,
        pub resource_calls: usize,
    }

    impl ScriptedSource {
        pub fn with_processes(processes: Vec<ProcessRecord>) -> Self {
            Self {
                processes,
                ..Self::default()
            }
        }

        /// Queues a sample whose every metric equals `value`
        pub fn push_uniform_sample(&mut self, value: f64) {
            self.samples.push_back(uniform_sample(value));
        }
    }

    /// A sample whose CPU total, memory percent, and disk rates all equal `value`
    pub fn uniform_sample(value: f64) -> ResourceSample {
        ResourceSample::from_readings(ResourceReadings {
            cpu_per_core: vec![value; 2],
            memory_used_mb: value,
            memory_total_mb: 100.0,
            disk_read_mbps: value,
            disk_write_mbps: value,
            disk_usage_percent: value,
            network_download_mbps: value,
            network_upload_mbps: value,
        })
    }

    pub fn record(pid: u32, name: &str, cpu: f64, status: ProcessStatus) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_mb: 100.0,
            owner: "user".to_string(),
            status,
            priority: 10,
            uptime_seconds: 60,
        }
    }

    impl SampleSource for ScriptedSource {
        fn process_list(&mut self, count: usize) -> Vec<ProcessRecord> {
            self.process_list_calls += 1;
            self.processes.iter().take(count).cloned().collect()
        }

        fn process_load(&mut self, record: &ProcessRecord) -> ProcessLoad {
            self.loads.pop_front().unwrap_or(ProcessLoad {
                cpu_percent: record.cpu_percent,
                memory_mb: record.memory_mb,
                toggle_status: false,
            })
        }

        fn resource_sample(&mut self) -> ResourceSample {
            self.resource_calls += 1;
            self.samples
                .pop_front()
                .unwrap_or_else(|| ResourceSample::zeroed(2))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_process_list_has_unique_sequential_pids() {
        let mut source = MockSource::new(8, 16384.0, Some(7));
        let processes = source.process_list(20);
        assert_eq!(processes.len(), 20);

        let pids: HashSet<u32> = processes.iter().map(|p| p.pid).collect();
        assert_eq!(pids.len(), 20, "pids must be unique");
        assert_eq!(processes[0].pid, FIRST_MOCK_PID);
        assert_eq!(processes[19].pid, FIRST_MOCK_PID + 19);
    }

    #[test]
    fn test_largest_process_count_keeps_pids_in_range() {
        let count = crate::constants::MAX_PROCESS_COUNT as usize;
        let mut source = MockSource::new(1, 1024.0, Some(3));
        let processes = source.process_list(count);
        assert_eq!(processes.len(), count);
        assert_eq!(
            processes.last().map(|p| p.pid),
            Some(FIRST_MOCK_PID + (count as u32 - 1))
        );
    }

    #[test]
    fn test_process_values_in_range() {
        let mut source = MockSource::new(8, 16384.0, Some(42));
        for p in source.process_list(200) {
            assert!((0.0..=15.0).contains(&p.cpu_percent), "cpu {}", p.cpu_percent);
            assert!((0.0..=500.0).contains(&p.memory_mb), "memory {}", p.memory_mb);
            assert!(p.priority <= 19);
            assert!(PROCESS_NAMES.contains(&p.name.as_str()));
            assert!(OWNERS.contains(&p.owner.as_str()));
            assert!(p.uptime_seconds < 24 * 3600);
        }
    }

    #[test]
    fn test_resource_sample_shape() {
        let mut source = MockSource::new(4, 8192.0, Some(1));
        let sample = source.resource_sample();
        assert_eq!(sample.cpu_per_core.len(), 4);
        assert_eq!(sample.memory_total_mb, 8192.0);
        assert!(sample.memory_used_mb < 8192.0);
        assert!((0.0..=100.0).contains(&sample.cpu_total_percent));
        assert!(sample.disk_write_mbps <= 80.0);
        assert!(sample.network_upload_mbps <= 5.0);
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let mut a = MockSource::new(8, 16384.0, Some(99));
        let mut b = MockSource::new(8, 16384.0, Some(99));
        assert_eq!(a.process_list(5), b.process_list(5));
        assert_eq!(a.resource_sample(), b.resource_sample());
    }

    #[test]
    fn test_status_toggle_is_occasional() {
        let mut source = MockSource::new(8, 16384.0, Some(3));
        let record = source.process_list(1).remove(0);
        let toggles = (0..1000)
            .filter(|_| source.process_load(&record).toggle_status)
            .count();
        assert!(toggles > 20 && toggles < 250, "expected roughly 10%, got {}", toggles);
    }

    #[test]
    fn test_zero_memory_total_is_tolerated() {
        let mut source = MockSource::new(1, 0.0, Some(5));
        let sample = source.resource_sample();
        assert_eq!(sample.memory_used_mb, 0.0);
        assert_eq!(sample.memory_percent, 0.0);
    }
}
