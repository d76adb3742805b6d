//! Display label formatting for playback positions and durations.

/// Label used for zero, negative, or non-finite durations
pub const EMPTY_TIME_LABEL: &str = "00:00";

/// Format a duration in seconds as a clock-style label.
///
/// Durations under an hour render as `M:SS` (minutes unpadded), longer ones as
/// `H:MM:SS`. Anything that is not a finite, non-negative value, or that
/// floors to zero whole seconds, renders as [`EMPTY_TIME_LABEL`].
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return EMPTY_TIME_LABEL.to_string();
    }

    let total = seconds.floor() as u64;
    if total == 0 {
        return EMPTY_TIME_LABEL.to_string();
    }

    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hrs > 0 {
        format!("{}:{:02}:{:02}", hrs, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(0.4), "00:00");
    }

    #[test]
    fn test_format_time_minutes() {
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(3599.0), "59:59");
    }

    #[test]
    fn test_format_time_hours() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(36000.0 + 59.0), "10:00:59");
    }

    #[test]
    fn test_format_time_invalid() {
        assert_eq!(format_time(-5.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "00:00");
    }
}
