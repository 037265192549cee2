// Date utility functions

use chrono::{Datelike, Duration, NaiveDate};

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const DAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday column index with Sunday = 0
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// 12-hour label for an hour row, e.g. "8 AM", "12 PM", "10 PM"
pub fn hour_label(hour: u8) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h > 12 => format!("{} PM", h - 12),
        h => format!("{} AM", h),
    }
}

/// "Feb 26" style short date
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "Thursday, February 26, 2026" style long date
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The next seven days starting from `from` (inclusive)
pub fn next_seven_days(from: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| from + Duration::days(i)).collect()
}

/// The Sunday-started week containing `date`
pub fn week_starting_sunday(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let sunday = date - Duration::days(offset);
    (0..7).map(|i| sunday + Duration::days(i)).collect()
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Both constructions are for day 1 of a valid month
    match first_of_next {
        Some(next) => next.pred_opt().map(|d| d.day()).unwrap_or(31),
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_index_sunday_first() {
        assert_eq!(
            weekday_index(NaiveDate::from_ymd_opt(2026, 2, 22).unwrap()),
            0
        );
        assert_eq!(
            weekday_index(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()),
            6
        );
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(8), "8 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(13), "1 PM");
        assert_eq!(hour_label(22), "10 PM");
        assert_eq!(hour_label(0), "12 AM");
    }

    #[test]
    fn test_next_seven_days() {
        let start = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        let days = next_seven_days(start);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], start);
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
    }

    #[test]
    fn test_week_starting_sunday() {
        // 2026-02-26 is a Thursday
        let thursday = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        let week = week_starting_sunday(thursday);
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2026, 2, 22).unwrap());
        assert_eq!(week[4], thursday);
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(
            days_in_month(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()),
            28
        );
        assert_eq!(
            days_in_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
            29
        );
        assert_eq!(
            days_in_month(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()),
            31
        );
    }
}
