// Feedback service
// Submitting session feedback and aggregating rating statistics

use chrono::NaiveDate;

use crate::models::feedback::Feedback;
use crate::services::store::DataStore;

/// Aggregated feedback numbers for the history/stat cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackStats {
    pub total_sessions: usize,
    /// Mean star rating, `None` when there is no feedback yet
    pub average_rating: Option<f32>,
    pub would_book_again: usize,
    /// Share of sessions marked "would book again", in whole percent
    pub repeat_rate_percent: u32,
}

impl FeedbackStats {
    fn from_entries(entries: &[&Feedback]) -> Self {
        let total_sessions = entries.len();
        let average_rating = if total_sessions > 0 {
            let sum: u32 = entries.iter().map(|f| f.rating as u32).sum();
            Some(sum as f32 / total_sessions as f32)
        } else {
            None
        };
        let would_book_again = entries.iter().filter(|f| f.would_book_again).count();
        let repeat_rate_percent = if total_sessions > 0 {
            ((would_book_again as f32 / total_sessions as f32) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            total_sessions,
            average_rating,
            would_book_again,
            repeat_rate_percent,
        }
    }

    /// Average rating formatted for display, defaulting to "5.0" for
    /// mentors without feedback yet.
    pub fn average_label(&self) -> String {
        match self.average_rating {
            Some(avg) => format!("{avg:.1}"),
            None => "5.0".to_string(),
        }
    }
}

/// Feedback submission over the in-memory store
pub struct FeedbackService<'a> {
    store: &'a mut DataStore,
}

impl<'a> FeedbackService<'a> {
    pub fn new(store: &'a mut DataStore) -> Self {
        Self { store }
    }

    /// Record feedback the current student left for a session
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        &mut self,
        booking_id: &str,
        mentor_id: &str,
        mentor_name: &str,
        rating: u8,
        what_worked_well: String,
        areas_for_improvement: String,
        time_management: u8,
        would_book_again: bool,
        date: NaiveDate,
    ) -> Result<String, String> {
        let feedback = Feedback {
            // Replaced by the store with a fresh id
            id: String::new(),
            booking_id: booking_id.to_string(),
            mentor_id: mentor_id.to_string(),
            mentor_name: mentor_name.to_string(),
            student_id: self.store.current_student().id.clone(),
            rating,
            what_worked_well,
            areas_for_improvement,
            time_management,
            would_book_again,
            date,
        };
        feedback.validate()?;
        Ok(self.store.push_feedback(feedback))
    }
}

/// Stats over all feedback left for a mentor
pub fn stats_for_mentor(store: &DataStore, mentor_id: &str) -> FeedbackStats {
    FeedbackStats::from_entries(&store.feedback_for_mentor(mentor_id))
}

/// Stats over all feedback a student has given
pub fn stats_for_student(store: &DataStore, student_id: &str) -> FeedbackStats {
    FeedbackStats::from_entries(&store.feedback_for_student(student_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_mentor() {
        let store = DataStore::seeded().unwrap();
        let stats = stats_for_mentor(&store, "m1");
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.average_rating, Some(5.0));
        assert_eq!(stats.repeat_rate_percent, 100);
    }

    #[test]
    fn test_stats_for_student_averages() {
        let store = DataStore::seeded().unwrap();
        let stats = stats_for_student(&store, "s1");
        assert_eq!(stats.total_sessions, 3);
        // Ratings 5, 5, 4
        let avg = stats.average_rating.unwrap();
        assert!((avg - 14.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(stats.would_book_again, 3);
    }

    #[test]
    fn test_stats_empty() {
        let store = DataStore::seeded().unwrap();
        let stats = stats_for_mentor(&store, "m6");
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.repeat_rate_percent, 0);
        assert_eq!(stats.average_label(), "5.0");
    }

    #[test]
    fn test_submit_validates_rating() {
        let mut store = DataStore::seeded().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let result = FeedbackService::new(&mut store).submit(
            "b1",
            "m1",
            "Dr. Sarah Mitchell",
            0,
            String::new(),
            String::new(),
            3,
            true,
            date,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_submit_appends_for_student() {
        let mut store = DataStore::seeded().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let id = FeedbackService::new(&mut store)
            .submit(
                "b1",
                "m1",
                "Dr. Sarah Mitchell",
                4,
                "Good pacing".to_string(),
                String::new(),
                4,
                false,
                date,
            )
            .unwrap();
        assert!(store.feedback().iter().any(|f| f.id == id));
        assert_eq!(stats_for_student(&store, "s1").total_sessions, 4);
    }
}
