//! Command-line argument parsing

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::Parser;

use crate::constants::{
    DEFAULT_CPU_CORES, DEFAULT_HISTORY_LEN, DEFAULT_MEMORY_TOTAL_MB, DEFAULT_PROCESS_COUNT,
    DEFAULT_PROCESS_TICK_MS, DEFAULT_RESOURCE_TICK_MS, MAX_CPU_CORES, MAX_HISTORY_LEN,
    MAX_PROCESS_COUNT, MAX_TICK_MS, MIN_TICK_MS,
};
use crate::error::ConfigError;
use crate::monitor::{DashboardConfig, SortDirection, SortField, SortSpec};

/// Terminal system-monitoring dashboard with simulated telemetry.
#[derive(Parser, Debug)]
#[command(
    name = "sysmon_dash",
    version,
    about = "System monitoring dashboard driven by simulated telemetry",
    after_help = "CONTROLS:
    q         Quit
    Enter     View process details
    k         Terminate selected process
    p         Suspend/Resume process
    s         Cycle sort column
    1-7       Sort by column (again to reverse)
    r         Reverse sort order
    /         Filter by name, user or PID
    e         Export to CSV
    ?         Show help overlay"
)]
pub struct Args {
    /// Process list refresh interval in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_PROCESS_TICK_MS,
        value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..=MAX_TICK_MS)
    )]
    pub process_interval: u64,

    /// Resource sampling interval in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_RESOURCE_TICK_MS,
        value_parser = clap::value_parser!(u64).range(MIN_TICK_MS..=MAX_TICK_MS)
    )]
    pub resource_interval: u64,

    /// Number of samples kept for the history charts
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_HISTORY_LEN,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_HISTORY_LEN)
    )]
    pub history: usize,

    /// Number of simulated processes
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PROCESS_COUNT,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_PROCESS_COUNT)
    )]
    pub processes: usize,

    /// Number of simulated CPU cores
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_CPU_CORES,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_CPU_CORES)
    )]
    pub cores: usize,

    /// Simulated physical memory in megabytes
    #[arg(long, value_name = "MB", default_value_t = DEFAULT_MEMORY_TOTAL_MB)]
    pub memory_mb: f64,

    /// Initial filter matched against name, user and PID
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Initial sort column (pid, name, cpu, memory, owner, status, priority)
    #[arg(short, long, value_name = "COLUMN", default_value = "cpu")]
    pub sort: SortField,

    /// Sort in ascending order (default is descending)
    #[arg(short, long)]
    pub ascending: bool,

    /// Seed for the random sample source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the process list to CSV and exit (non-interactive)
    #[arg(short = 'x', long)]
    pub export: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validated runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub dashboard: DashboardConfig,
    pub seed: Option<u64>,
    pub export: bool,
    pub log_file: Option<PathBuf>,
    pub verbose: u8,
}

impl Args {
    /// Converts parsed arguments into validated settings.
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let direction = if self.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };

        let dashboard = DashboardConfig {
            process_interval: Duration::from_millis(self.process_interval),
            resource_interval: Duration::from_millis(self.resource_interval),
            history_len: self.history,
            process_count: self.processes,
            cpu_cores: self.cores,
            memory_total_mb: self.memory_mb,
            sort: SortSpec::new(self.sort, direction),
            filter: self.filter.unwrap_or_default(),
        };
        dashboard.validate()?;

        Ok(Settings {
            dashboard,
            seed: self.seed,
            export: self.export,
            log_file: self.log_file,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("sysmon_dash").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]).expect("parses").into_settings().expect("valid");
        assert_eq!(settings.dashboard, DashboardConfig::default());
        assert!(!settings.export);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.verbose, 0);
    }

    #[test]
    fn test_sort_and_filter_options() {
        let settings = parse(&["-s", "memory", "-a", "-f", "chrome"])
            .expect("parses")
            .into_settings()
            .expect("valid");
        assert_eq!(
            settings.dashboard.sort,
            SortSpec::new(SortField::Memory, SortDirection::Ascending)
        );
        assert_eq!(settings.dashboard.filter, "chrome");
    }

    #[test]
    fn test_invalid_sort_column_is_rejected() {
        assert!(parse(&["--sort", "threads"]).is_err());
    }

    #[test]
    fn test_interval_range_is_enforced() {
        assert!(parse(&["--process-interval", "100"]).is_err());
        assert!(parse(&["--resource-interval", "20000"]).is_err());
        let args = parse(&["--process-interval", "500", "--resource-interval", "250"])
            .expect("in range");
        let settings = args.into_settings().expect("valid");
        assert_eq!(settings.dashboard.process_interval, Duration::from_millis(500));
        assert_eq!(settings.dashboard.resource_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_count_options_are_capped() {
        let over = |max: u64| (max + 1).to_string();
        assert!(parse(&["--history", &over(MAX_HISTORY_LEN)]).is_err());
        assert!(parse(&["--processes", &over(MAX_PROCESS_COUNT)]).is_err());
        assert!(parse(&["--cores", &over(MAX_CPU_CORES)]).is_err());
        assert!(parse(&["--processes", "18446744073709551615"]).is_err());

        let max = |max: u64| max.to_string();
        let settings = parse(&[
            "--history",
            &max(MAX_HISTORY_LEN),
            "--processes",
            &max(MAX_PROCESS_COUNT),
            "--cores",
            &max(MAX_CPU_CORES),
        ])
        .expect("limits are accepted")
        .into_settings()
        .expect("valid");
        assert_eq!(settings.dashboard.process_count, MAX_PROCESS_COUNT as usize);
        assert_eq!(settings.dashboard.cpu_cores, MAX_CPU_CORES as usize);
    }

    #[test]
    fn test_semantic_validation() {
        let err = parse(&["--history", "0"]).expect("parses").into_settings();
        assert!(matches!(err, Err(ConfigError::EmptyHistory)));

        let err = parse(&["--cores", "0"]).expect("parses").into_settings();
        assert!(matches!(err, Err(ConfigError::NoCores)));
    }

    #[test]
    fn test_flags() {
        let settings = parse(&["-x", "--seed", "7", "-vv", "--log-file", "dash.log"])
            .expect("parses")
            .into_settings()
            .expect("valid");
        assert!(settings.export);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.verbose, 2);
        assert_eq!(settings.log_file, Some(PathBuf::from("dash.log")));
    }
}
