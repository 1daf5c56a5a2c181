/// Format a number of seconds as a human-readable duration.
///
/// Under a minute the value renders as `"5.5s"`; from one minute up it
/// splits into whole minutes and fractional seconds, `"1m 30.5s"`.
/// Negative input is undefined and assumed validated away upstream.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{seconds:.1}s");
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let remainder = seconds % 60.0;
    format!("{minutes}m {remainder:.1}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_values_under_a_minute_as_seconds() {
        assert_eq!(format_duration(0.0), "0.0s");
        assert_eq!(format_duration(5.5), "5.5s");
        assert_eq!(format_duration(59.9), "59.9s");
    }

    #[test]
    fn formats_values_from_a_minute_up_as_minutes_and_seconds() {
        assert_eq!(format_duration(60.0), "1m 0.0s");
        assert_eq!(format_duration(90.5), "1m 30.5s");
        assert_eq!(format_duration(125.0), "2m 5.0s");
    }
}
