//! Point-in-time resource snapshots
//!
//! A `ResourceSample` is only built from raw readings so the derived
//! totals (mean CPU, memory percentage) always agree with their inputs.

use crate::constants::{DEFAULT_CPU_CORES, DEFAULT_MEMORY_TOTAL_MB};

/// Rounds to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Raw readings as produced by a sample source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceReadings {
    pub cpu_per_core: Vec<f64>,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    pub disk_read_mbps: f64,
    pub disk_write_mbps: f64,
    pub disk_usage_percent: f64,
    pub network_download_mbps: f64,
    pub network_upload_mbps: f64,
}

/// Snapshot of system-wide resource usage
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSample {
    /// Mean of `cpu_per_core`, one decimal
    pub cpu_total_percent: f64,
    pub cpu_per_core: Vec<f64>,
    pub memory_used_mb: f64,
    pub memory_total_mb: f64,
    /// `memory_used_mb / memory_total_mb * 100`, one decimal
    pub memory_percent: f64,
    pub disk_read_mbps: f64,
    pub disk_write_mbps: f64,
    pub disk_usage_percent: f64,
    pub network_download_mbps: f64,
    pub network_upload_mbps: f64,
}

impl ResourceSample {
    /// Builds a sample, deriving the CPU total and memory percentage.
    pub fn from_readings(readings: ResourceReadings) -> Self {
        let cpu_total_percent = if readings.cpu_per_core.is_empty() {
            0.0
        } else {
            let sum: f64 = readings.cpu_per_core.iter().sum();
            round1(sum / readings.cpu_per_core.len() as f64)
        };

        let memory_percent = if readings.memory_total_mb > 0.0 {
            round1(readings.memory_used_mb / readings.memory_total_mb * 100.0)
        } else {
            0.0
        };

        Self {
            cpu_total_percent,
            cpu_per_core: readings.cpu_per_core,
            memory_used_mb: readings.memory_used_mb,
            memory_total_mb: readings.memory_total_mb,
            memory_percent,
            disk_read_mbps: readings.disk_read_mbps,
            disk_write_mbps: readings.disk_write_mbps,
            disk_usage_percent: readings.disk_usage_percent,
            network_download_mbps: readings.network_download_mbps,
            network_upload_mbps: readings.network_upload_mbps,
        }
    }

    /// An all-zero sample with `cores` idle cores
    #[cfg(test)]
    pub fn zeroed(cores: usize) -> Self {
        Self::from_readings(ResourceReadings {
            cpu_per_core: vec![0.0; cores],
            ..ResourceReadings::default()
        })
    }
}

/// Static description of the simulated host
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub uptime: String,
    pub cpu_model: String,
    pub cpu_cores: usize,
    pub memory_total_mb: f64,
}

impl SystemInfo {
    pub fn simulated(cpu_cores: usize, memory_total_mb: f64) -> Self {
        Self {
            hostname: "system-monitor".to_string(),
            platform: "Darwin".to_string(),
            uptime: "5d 12h 34m".to_string(),
            cpu_model: "Intel Core i9-12900K".to_string(),
            cpu_cores,
            memory_total_mb,
        }
    }
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self::simulated(DEFAULT_CPU_CORES, DEFAULT_MEMORY_TOTAL_MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35), 12.4);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_cpu_total_is_rounded_mean() {
        let sample = ResourceSample::from_readings(ResourceReadings {
            cpu_per_core: vec![10.0, 20.0, 30.5],
            memory_total_mb: 100.0,
            ..ResourceReadings::default()
        });
        assert_eq!(sample.cpu_total_percent, 20.2);
        assert_eq!(sample.cpu_per_core.len(), 3);
    }

    #[test]
    fn test_memory_percent_is_derived() {
        let sample = ResourceSample::from_readings(ResourceReadings {
            cpu_per_core: vec![0.0],
            memory_used_mb: 4096.0,
            memory_total_mb: 16384.0,
            ..ResourceReadings::default()
        });
        assert_eq!(sample.memory_percent, 25.0);

        let sample = ResourceSample::from_readings(ResourceReadings {
            memory_used_mb: 1.0,
            memory_total_mb: 3.0,
            ..ResourceReadings::default()
        });
        assert_eq!(sample.memory_percent, 33.3);
    }

    #[test]
    fn test_degenerate_readings_do_not_divide_by_zero() {
        let sample = ResourceSample::from_readings(ResourceReadings::default());
        assert_eq!(sample.cpu_total_percent, 0.0);
        assert_eq!(sample.memory_percent, 0.0);
    }

    #[test]
    fn test_zeroed_keeps_core_count() {
        let sample = ResourceSample::zeroed(8);
        assert_eq!(sample.cpu_per_core, vec![0.0; 8]);
        assert_eq!(sample.cpu_total_percent, 0.0);
    }
}
