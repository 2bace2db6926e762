//! Human-readable formatting of sizes and durations

use crate::constants::MB_PER_GB;

/// Formats a megabyte amount, switching to GB at 1024 MB.
///
/// # Returns
/// * `String` - Formatted string like "512 MB" or "1.50 GB"
pub fn format_megabytes(mb: f64) -> String {
    if mb < MB_PER_GB {
        format!("{:.0} MB", mb)
    } else {
        format!("{:.2} GB", mb / MB_PER_GB)
    }
}

/// Formats an uptime in seconds to a human-readable string.
///
/// # Returns
/// * `String` - Formatted string like "5s", "2m", "1h 30m", "2d 5h"
pub fn format_uptime(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        let mins = seconds / 60;
        let secs = seconds % 60;
        if secs > 0 {
            format!("{}m {}s", mins, secs)
        } else {
            format!("{}m", mins)
        }
    } else if seconds < 86400 {
        let hours = seconds / 3600;
        let mins = (seconds % 3600) / 60;
        if mins > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}h", hours)
        }
    } else {
        let days = seconds / 86400;
        let hours = (seconds % 86400) / 3600;
        if hours > 0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        }
    }
}
