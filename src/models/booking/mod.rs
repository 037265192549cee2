// Booking module
// Session booking requests between students and mentors

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rescheduled,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Display label used on status badges
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Rescheduled => "Rescheduled",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// A mentoring session booking.
///
/// Times are wall-clock `"HH:MM"` strings as handed over by the booking
/// store; the grid only ever needs the whole hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub mentor_id: String,
    pub mentor_name: String,
    pub student_id: String,
    pub student_name: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Booking {
    /// Weekday column of the booking date, 0-6 with Sunday = 0
    pub fn weekday_index(&self) -> u8 {
        self.date.weekday().num_days_from_sunday() as u8
    }

    /// Whole start hour parsed from the "HH:MM" string
    pub fn start_hour(&self) -> Option<u8> {
        parse_hour(&self.start_time)
    }

    /// Whole end hour parsed from the "HH:MM" string
    pub fn end_hour(&self) -> Option<u8> {
        parse_hour(&self.end_time)
    }

    /// Whether this booking still occupies the calendar (pending or confirmed)
    pub fn is_upcoming(&self) -> bool {
        matches!(
            self.status,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::Rescheduled
        )
    }

    /// Whether the booking occupies the given hour on its own date
    pub fn covers_hour(&self, hour: u8) -> bool {
        match (self.start_hour(), self.end_hour()) {
            (Some(start), Some(end)) => hour >= start && hour < end,
            _ => false,
        }
    }
}

fn parse_hour(time: &str) -> Option<u8> {
    let hour: u8 = time.split(':').next()?.parse().ok()?;
    (hour < 24).then_some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking {
            id: "b1".to_string(),
            mentor_id: "m1".to_string(),
            mentor_name: "Dr. Sarah Mitchell".to_string(),
            student_id: "s1".to_string(),
            student_name: "Jessica Parker".to_string(),
            // 2026-02-26 is a Thursday
            date: NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
            start_time: "14:00".to_string(),
            end_time: "15:00".to_string(),
            status: BookingStatus::Confirmed,
            session_notes: None,
            subject: Some("Mathematics".to_string()),
        }
    }

    #[test]
    fn test_weekday_index_sunday_based() {
        let mut booking = sample_booking();
        assert_eq!(booking.weekday_index(), 4); // Thursday

        booking.date = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(); // Sunday
        assert_eq!(booking.weekday_index(), 0);
    }

    #[test]
    fn test_hours_parsed_from_time_strings() {
        let booking = sample_booking();
        assert_eq!(booking.start_hour(), Some(14));
        assert_eq!(booking.end_hour(), Some(15));
    }

    #[test]
    fn test_malformed_time_yields_none() {
        let mut booking = sample_booking();
        booking.start_time = "noon".to_string();
        assert_eq!(booking.start_hour(), None);
        assert!(!booking.covers_hour(12));
    }

    #[test]
    fn test_covers_hour_half_open() {
        let booking = sample_booking();
        assert!(booking.covers_hour(14));
        assert!(!booking.covers_hour(15));
        assert!(!booking.covers_hour(13));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }

    #[test]
    fn test_is_upcoming() {
        let mut booking = sample_booking();
        assert!(booking.is_upcoming());
        booking.status = BookingStatus::Completed;
        assert!(!booking.is_upcoming());
        booking.status = BookingStatus::Cancelled;
        assert!(!booking.is_upcoming());
    }
}
