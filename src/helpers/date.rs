//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone};

/// Calendar year of an instant, in the instant's own time zone
pub fn year_of<Tz: TimeZone>(date: &DateTime<Tz>) -> i32 {
    date.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_year_of() {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(year_of(&date), 2025);
    }

    #[test]
    fn test_year_of_uses_local_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2026, 1, 1, 0, 30, 0).unwrap();
        assert_eq!(year_of(&date), 2026);
        assert_eq!(year_of(&date.with_timezone(&Utc)), 2025);
    }
}
