//! In-memory data store backing the demo application.
//!
//! All domain data lives here for the lifetime of the process, seeded from
//! an embedded JSON asset. There is no persistence layer; the store is the
//! single collaborator the UI hands state to (e.g. the availability grid's
//! Save action).

use serde::Deserialize;
use thiserror::Error;

use crate::models::availability::AvailabilityBlock;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::feedback::Feedback;
use crate::models::mentor::Mentor;
use crate::models::user::UserProfile;

const SEED_JSON: &str = include_str!("seed.json");

/// Errors surfaced by store lookups and mutations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown booking id: {0}")]
    UnknownBooking(String),
    #[error("unknown mentor id: {0}")]
    UnknownMentor(String),
    #[error("alternative time suggestion cannot be empty")]
    EmptySuggestion,
    #[error("failed to parse seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeedData {
    mentors: Vec<Mentor>,
    bookings: Vec<Booking>,
    feedback: Vec<Feedback>,
    availability: Vec<AvailabilityBlock>,
    current_student: UserProfile,
    current_mentor: UserProfile,
}

/// The application's in-memory dataset
pub struct DataStore {
    mentors: Vec<Mentor>,
    bookings: Vec<Booking>,
    feedback: Vec<Feedback>,
    availability: Vec<AvailabilityBlock>,
    current_student: UserProfile,
    current_mentor: UserProfile,
    next_booking_seq: u64,
    next_feedback_seq: u64,
}

impl DataStore {
    /// Build the store from the embedded seed asset
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_seed_json(SEED_JSON)
    }

    /// Build the store from a JSON seed document
    pub fn from_seed_json(json: &str) -> Result<Self, StoreError> {
        let seed: SeedData = serde_json::from_str(json)?;
        log::info!(
            "Seeded store: {} mentors, {} bookings, {} feedback entries, {} availability blocks",
            seed.mentors.len(),
            seed.bookings.len(),
            seed.feedback.len(),
            seed.availability.len()
        );
        let next_booking_seq = seed.bookings.len() as u64 + 1;
        let next_feedback_seq = seed.feedback.len() as u64 + 1;
        Ok(Self {
            mentors: seed.mentors,
            bookings: seed.bookings,
            feedback: seed.feedback,
            availability: seed.availability,
            current_student: seed.current_student,
            current_mentor: seed.current_mentor,
            next_booking_seq,
            next_feedback_seq,
        })
    }

    pub fn current_student(&self) -> &UserProfile {
        &self.current_student
    }

    pub fn current_mentor(&self) -> &UserProfile {
        &self.current_mentor
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn mentor(&self, id: &str) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn bookings_for_mentor(&self, mentor_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.mentor_id == mentor_id)
            .collect()
    }

    pub fn bookings_for_student(&self, student_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.student_id == student_id)
            .collect()
    }

    /// Confirmed bookings for a mentor - the read-only overlay consumed by
    /// the availability grid.
    pub fn confirmed_bookings_for_mentor(&self, mentor_id: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.mentor_id == mentor_id && b.status == BookingStatus::Confirmed)
            .collect()
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn feedback_for_mentor(&self, mentor_id: &str) -> Vec<&Feedback> {
        self.feedback
            .iter()
            .filter(|f| f.mentor_id == mentor_id)
            .collect()
    }

    pub fn feedback_for_student(&self, student_id: &str) -> Vec<&Feedback> {
        self.feedback
            .iter()
            .filter(|f| f.student_id == student_id)
            .collect()
    }

    /// The mentor's saved availability blocks, cloned so the grid can edit
    /// them freely until the next save.
    pub fn availability_for_mentor(&self, mentor_id: &str) -> Vec<AvailabilityBlock> {
        self.availability
            .iter()
            .filter(|block| block.mentor_id == mentor_id)
            .cloned()
            .collect()
    }

    /// Replace a mentor's availability with the grid's current block list.
    /// Blocks owned by other mentors are untouched.
    pub fn replace_availability(&mut self, mentor_id: &str, blocks: Vec<AvailabilityBlock>) {
        self.availability.retain(|block| block.mentor_id != mentor_id);
        log::info!(
            "Saving {} availability block(s) for mentor {}",
            blocks.len(),
            mentor_id
        );
        self.availability.extend(blocks);
    }

    pub(crate) fn push_booking(&mut self, mut booking: Booking) -> String {
        booking.id = format!("b{}", self.next_booking_seq);
        self.next_booking_seq += 1;
        let id = booking.id.clone();
        self.bookings.push(booking);
        id
    }

    pub(crate) fn push_feedback(&mut self, mut feedback: Feedback) -> String {
        feedback.id = format!("f{}", self.next_feedback_seq);
        self.next_feedback_seq += 1;
        let id = feedback.id.clone();
        self.feedback.push(feedback);
        id
    }

    pub(crate) fn set_booking_status(
        &mut self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<(), StoreError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| StoreError::UnknownBooking(booking_id.to_string()))?;
        log::info!(
            "Booking {} status: {} -> {}",
            booking_id,
            booking.status.label(),
            status.label()
        );
        booking.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_parses() {
        let store = DataStore::seeded().unwrap();
        assert!(!store.mentors().is_empty());
        assert!(!store.bookings().is_empty());
        assert_eq!(store.current_student().id, "s1");
        assert_eq!(store.current_mentor().id, "m1");
    }

    #[test]
    fn test_confirmed_filter_excludes_pending() {
        let store = DataStore::seeded().unwrap();
        let confirmed = store.confirmed_bookings_for_mentor("m1");
        assert!(confirmed
            .iter()
            .all(|b| b.status == BookingStatus::Confirmed));
        let all = store.bookings_for_mentor("m1");
        assert!(all.len() > confirmed.len());
    }

    #[test]
    fn test_replace_availability_scoped_to_mentor() {
        let mut store = DataStore::seeded().unwrap();
        let foreign = AvailabilityBlock::new("x1", "m2", 2, 10, 12).unwrap();
        store.replace_availability("m2", vec![foreign.clone()]);

        store.replace_availability("m1", vec![]);
        assert!(store.availability_for_mentor("m1").is_empty());
        assert_eq!(store.availability_for_mentor("m2"), vec![foreign]);
    }

    #[test]
    fn test_set_status_unknown_booking() {
        let mut store = DataStore::seeded().unwrap();
        let result = store.set_booking_status("nope", BookingStatus::Confirmed);
        assert!(matches!(result, Err(StoreError::UnknownBooking(_))));
    }

    #[test]
    fn test_push_booking_assigns_fresh_ids() {
        let mut store = DataStore::seeded().unwrap();
        let template = store.bookings()[0].clone();
        let first = store.push_booking(template.clone());
        let second = store.push_booking(template);
        assert_ne!(first, second);
        assert!(store.booking(&first).is_some());
        assert!(store.booking(&second).is_some());
    }
}
