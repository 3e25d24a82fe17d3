//! Display formatting helpers

use std::time::Duration;

/// Format elapsed time as `H:MM:SS`, dropping sub-second precision.
/// Hours keep counting past a day.
pub fn format_elapsed(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Counter text shown under the clock
pub fn format_count(count: u64) -> String {
    format!("Intervals: {}", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_sub_second_precision() {
        assert_eq!(format_elapsed(Duration::ZERO), "0:00:00");
        assert_eq!(format_elapsed(Duration::from_millis(3_600)), "0:00:03");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "0:00:59");
    }

    #[test]
    fn rolls_minutes_and_hours() {
        assert_eq!(format_elapsed(Duration::from_secs(61)), "0:01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3_600 + 5 * 60 + 9)), "1:05:09");
        assert_eq!(format_elapsed(Duration::from_secs(26 * 3_600)), "26:00:00");
    }

    #[test]
    fn counter_text() {
        assert_eq!(format_count(0), "Intervals: 0");
        assert_eq!(format_count(12), "Intervals: 12");
    }
}
