//! Elapsed-time formatting

/// Format a number of seconds as `H:MM:SS`.
///
/// Hours are not padded and have no upper bound; minutes and seconds are
/// always two digits.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Text for the last-session summary label
pub fn summary_message(total_seconds: u64) -> String {
    format!("You spent {} studying last time", format_elapsed(total_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_values() {
        assert_eq!(format_elapsed(0), "0:00:00");
        assert_eq!(format_elapsed(59), "0:00:59");
        assert_eq!(format_elapsed(60), "0:01:00");
        assert_eq!(format_elapsed(3600), "1:00:00");
        assert_eq!(format_elapsed(3661), "1:01:01");
    }

    #[test]
    fn hours_grow_without_padding() {
        assert_eq!(format_elapsed(36_000), "10:00:00");
        assert_eq!(format_elapsed(360_000 + 59 * 60 + 59), "100:59:59");
    }

    #[test]
    fn minutes_and_seconds_stay_in_range() {
        for s in (0..20_000u64).step_by(7) {
            let text = format_elapsed(s);
            let parts: Vec<&str> = text.split(':').collect();
            assert_eq!(parts.len(), 3, "{}", text);
            assert_eq!(parts[1].len(), 2);
            assert_eq!(parts[2].len(), 2);
            let minutes: u64 = parts[1].parse().unwrap();
            let seconds: u64 = parts[2].parse().unwrap();
            assert!(minutes <= 59 && seconds <= 59, "{}", text);
            let hours: u64 = parts[0].parse().unwrap();
            assert_eq!(hours * 3600 + minutes * 60 + seconds, s);
        }
    }

    #[test]
    fn summary_wraps_formatted_time() {
        assert_eq!(summary_message(3661), "You spent 1:01:01 studying last time");
    }
}
