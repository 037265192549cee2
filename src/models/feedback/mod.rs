// Feedback module
// Post-session feedback left by students

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Feedback a student left for a completed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub booking_id: String,
    pub mentor_id: String,
    pub mentor_name: String,
    pub student_id: String,
    /// Overall star rating, 1-5
    pub rating: u8,
    pub what_worked_well: String,
    pub areas_for_improvement: String,
    /// Time management score, 1-5
    pub time_management: u8,
    pub would_book_again: bool,
    pub date: NaiveDate,
}

impl Feedback {
    /// Validate the score ranges
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err(format!("Rating must be 1-5, got {}", self.rating));
        }
        if !(1..=5).contains(&self.time_management) {
            return Err(format!(
                "Time management score must be 1-5, got {}",
                self.time_management
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_feedback() -> Feedback {
        Feedback {
            id: "f1".to_string(),
            booking_id: "b10".to_string(),
            mentor_id: "m1".to_string(),
            mentor_name: "Dr. Sarah Mitchell".to_string(),
            student_id: "s1".to_string(),
            rating: 5,
            what_worked_well: "Clear explanations".to_string(),
            areas_for_improvement: "More practice problems".to_string(),
            time_management: 4,
            would_book_again: true,
            date: NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
        }
    }

    #[test]
    fn test_validate_success() {
        assert!(sample_feedback().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_rating() {
        let mut feedback = sample_feedback();
        feedback.rating = 0;
        assert!(feedback.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_high_time_management() {
        let mut feedback = sample_feedback();
        feedback.time_management = 6;
        assert!(feedback.validate().is_err());
    }
}
