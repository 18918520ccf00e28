/// Utilities for display formatting
///
/// Keeps time and size rendering consistent across the panels.
use chrono::{DateTime, Local, Utc};

/// Format a timestamp as local time of day, HH:MM:SS
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Format a timestamp as short local time, HH:MM
pub fn format_time_short(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Format a byte count for the file list
/// Example: 2048 -> "2.0 KB"
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    // Local-time output depends on the host timezone; only the shape is
    // asserted here.
    #[test]
    fn test_time_shapes() {
        let ts = Utc::now();
        let long = format_time(ts);
        let short = format_time_short(ts);
        assert_eq!(long.len(), 8);
        assert_eq!(long.matches(':').count(), 2);
        assert_eq!(short.len(), 5);
        assert_eq!(short.matches(':').count(), 1);
    }
}
