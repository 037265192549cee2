// Test fixtures - reusable test data
// Provides consistent test data across the integration tests

use chrono::NaiveDate;
use mentor_connect::models::availability::AvailabilityBlock;
use mentor_connect::models::booking::{Booking, BookingStatus};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 2nd 2026
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    /// Thursday, February 26th 2026 (the seeded confirmed booking's date)
    pub fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }
}

/// Sample availability blocks
pub mod blocks {
    use super::*;

    /// Monday morning block, 9-12
    pub fn monday_morning() -> AvailabilityBlock {
        AvailabilityBlock::new("t-mon-am", "m1", 1, 9, 12).unwrap()
    }

    /// Monday afternoon block, 14-17
    pub fn monday_afternoon() -> AvailabilityBlock {
        AvailabilityBlock::new("t-mon-pm", "m1", 1, 14, 17).unwrap()
    }
}

/// Sample bookings
pub mod bookings {
    use super::*;

    /// A confirmed Thursday 14:00-15:00 session for mentor m1
    pub fn confirmed_thursday() -> Booking {
        Booking {
            id: "t-b1".to_string(),
            mentor_id: "m1".to_string(),
            mentor_name: "Dr. Sarah Mitchell".to_string(),
            student_id: "s1".to_string(),
            student_name: "Jessica Parker".to_string(),
            date: dates::thursday(),
            start_time: "14:00".to_string(),
            end_time: "15:00".to_string(),
            status: BookingStatus::Confirmed,
            session_notes: None,
            subject: Some("Mathematics".to_string()),
        }
    }
}
