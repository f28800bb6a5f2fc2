// ── Remaining-time formatting ──
//
// `H:MM:SS` from one hour upward (hours are not wrapped at a day),
// `MM:SS` below that. Negative durations clamp to zero.

use chrono::TimeDelta;

const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_MINUTE: i64 = 60;

/// Format a remaining duration for display.
pub fn format_remaining(remaining: TimeDelta) -> String {
    format_remaining_secs(remaining.num_seconds())
}

/// Same as [`format_remaining`], from whole seconds.
pub fn format_remaining_secs(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = secs % SECS_PER_MINUTE;

    if hours >= 1 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_format_at_exactly_one_hour() {
        assert_eq!(format_remaining(TimeDelta::seconds(3600)), "1:00:00");
        assert_eq!(format_remaining(TimeDelta::seconds(3599)), "59:59");
    }

    #[test]
    fn short_and_long_durations() {
        assert_eq!(format_remaining_secs(0), "00:00");
        assert_eq!(format_remaining_secs(65), "01:05");
        assert_eq!(format_remaining_secs(3661), "1:01:01");
        assert_eq!(format_remaining_secs(25 * 3600 + 5), "25:00:05");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_remaining(TimeDelta::seconds(-90)), "00:00");
    }
}
