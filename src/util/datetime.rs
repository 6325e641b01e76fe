use chrono::{DateTime, Local};

/// Display format shared by every timestamp this program prints.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts a unix-epoch second count into local time.
///
/// Returns `None` when the value is outside the range chrono can represent.
pub fn from_unix_seconds(secs: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_from_unix_seconds() {
        let dt = from_unix_seconds(1_700_000_000).expect("in range");
        assert_eq!(dt, Local.timestamp_opt(1_700_000_000, 0).unwrap());
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_from_unix_seconds_out_of_range() {
        assert!(from_unix_seconds(i64::MAX).is_none());
    }
}
