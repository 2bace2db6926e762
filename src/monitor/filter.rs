//! Free-text process filter

use super::process::ProcessRecord;

/// A single search term matched against name, owner, and pid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessFilter {
    term: String,
    term_lower: String,
}

impl ProcessFilter {
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let term_lower = term.to_lowercase();
        Self { term, term_lower }
    }

    /// The term as typed
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive substring match on name, owner, or decimal pid.
    /// An empty term matches every record.
    pub fn matches(&self, record: &ProcessRecord) -> bool {
        if self.term_lower.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.term_lower)
            || record.owner.to_lowercase().contains(&self.term_lower)
            || record.pid.to_string().contains(&self.term_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::process::ProcessStatus;

    fn record(pid: u32, name: &str, owner: &str) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu_percent: 0.0,
            memory_mb: 0.0,
            owner: owner.to_string(),
            status: ProcessStatus::Running,
            priority: 0,
            uptime_seconds: 0,
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        let filter = ProcessFilter::default();
        assert!(filter.matches(&record(1, "", "")));
        assert!(filter.matches(&record(1000, "chrome", "root")));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let filter = ProcessFilter::new("ChRo");
        assert!(filter.matches(&record(1, "chrome", "user")));
        assert!(!filter.matches(&record(1, "firefox", "user")));
    }

    #[test]
    fn test_matches_owner() {
        let filter = ProcessFilter::new("ADM");
        assert!(filter.matches(&record(1, "nginx", "admin")));
    }

    #[test]
    fn test_matches_pid_substring() {
        let filter = ProcessFilter::new("01");
        assert!(filter.matches(&record(1001, "nginx", "root")));
        assert!(!filter.matches(&record(1100, "nginx", "root")));
    }

    #[test]
    fn test_no_field_matches() {
        let filter = ProcessFilter::new("zzz");
        assert!(!filter.matches(&record(1000, "chrome", "root")));
    }

    #[test]
    fn test_term_is_kept_as_typed() {
        let filter = ProcessFilter::new("Node");
        assert_eq!(filter.term(), "Node");
        assert!(!filter.is_empty());
    }
}
