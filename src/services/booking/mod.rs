// Booking service
// Booking requests and the mentor's accept/decline/reschedule actions

use chrono::NaiveDate;

use crate::models::booking::{Booking, BookingStatus};
use crate::services::store::{DataStore, StoreError};

/// Session length offered by the booking flow, in whole hours
pub const SESSION_LENGTH_HOURS: u8 = 1;

/// Booking mutations over the in-memory store
pub struct BookingService<'a> {
    store: &'a mut DataStore,
}

impl<'a> BookingService<'a> {
    pub fn new(store: &'a mut DataStore) -> Self {
        Self { store }
    }

    /// Submit a new one-hour booking request from the current student.
    /// The request starts out `Pending` until the mentor responds.
    pub fn submit_request(
        &mut self,
        mentor_id: &str,
        date: NaiveDate,
        start_hour: u8,
        session_notes: Option<String>,
        subject: Option<String>,
    ) -> Result<String, StoreError> {
        let mentor = self
            .store
            .mentor(mentor_id)
            .ok_or_else(|| StoreError::UnknownMentor(mentor_id.to_string()))?;
        let student = self.store.current_student();

        let booking = Booking {
            // Replaced by the store with a fresh id
            id: String::new(),
            mentor_id: mentor.id.clone(),
            mentor_name: mentor.name.clone(),
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            date,
            start_time: format!("{start_hour:02}:00"),
            end_time: format!("{:02}:00", start_hour + SESSION_LENGTH_HOURS),
            status: BookingStatus::Pending,
            session_notes,
            subject,
        };

        let id = self.store.push_booking(booking);
        log::info!("Submitted booking request {id} for mentor {mentor_id}");
        Ok(id)
    }

    /// Accept a pending request, confirming the session
    pub fn accept(&mut self, booking_id: &str) -> Result<(), StoreError> {
        self.store
            .set_booking_status(booking_id, BookingStatus::Confirmed)
    }

    /// Decline a pending request
    pub fn decline(&mut self, booking_id: &str) -> Result<(), StoreError> {
        self.store
            .set_booking_status(booking_id, BookingStatus::Cancelled)
    }

    /// Answer a pending request with alternative times. The free-text
    /// suggestion is stored on the booking's session notes and the booking
    /// is marked `Rescheduled` so the student sees it needs attention.
    pub fn suggest_new_time(&mut self, booking_id: &str, message: &str) -> Result<(), StoreError> {
        if message.trim().is_empty() {
            return Err(StoreError::EmptySuggestion);
        }
        self.store
            .set_booking_status(booking_id, BookingStatus::Rescheduled)?;
        log::info!("Suggested new time for booking {booking_id}: {message}");
        Ok(())
    }
}

/// Hourly slots a student can request from a mentor on a given date.
///
/// A slot is open when it falls inside one of the mentor's availability
/// blocks for that weekday and no confirmed booking already covers the
/// hour on that date.
pub fn open_slots(store: &DataStore, mentor_id: &str, date: NaiveDate, hours: &[u8]) -> Vec<u8> {
    use chrono::Datelike;

    let weekday = date.weekday().num_days_from_sunday() as u8;
    let blocks = store.availability_for_mentor(mentor_id);
    let confirmed = store.confirmed_bookings_for_mentor(mentor_id);

    hours
        .iter()
        .copied()
        .filter(|&hour| blocks.iter().any(|block| block.contains(weekday, hour)))
        .filter(|&hour| {
            !confirmed
                .iter()
                .any(|booking| booking.date == date && booking.covers_hour(hour))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::DataStore;

    fn seeded() -> DataStore {
        DataStore::seeded().unwrap()
    }

    #[test]
    fn test_submit_request_is_pending() {
        let mut store = seeded();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let id = BookingService::new(&mut store)
            .submit_request("m3", date, 10, Some("Notes".to_string()), None)
            .unwrap();

        let booking = store.booking(&id).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.start_time, "10:00");
        assert_eq!(booking.end_time, "11:00");
        assert_eq!(booking.student_id, "s1");
        assert_eq!(booking.mentor_name, "Emily Chen");
    }

    #[test]
    fn test_submit_request_unknown_mentor() {
        let mut store = seeded();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let result = BookingService::new(&mut store).submit_request("m99", date, 10, None, None);
        assert!(matches!(result, Err(StoreError::UnknownMentor(_))));
    }

    #[test]
    fn test_accept_confirms() {
        let mut store = seeded();
        BookingService::new(&mut store).accept("b4").unwrap();
        assert_eq!(
            store.booking("b4").unwrap().status,
            BookingStatus::Confirmed
        );
    }

    #[test]
    fn test_decline_cancels() {
        let mut store = seeded();
        BookingService::new(&mut store).decline("b4").unwrap();
        assert_eq!(
            store.booking("b4").unwrap().status,
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn test_suggest_new_time_requires_message() {
        let mut store = seeded();
        let result = BookingService::new(&mut store).suggest_new_time("b4", "   ");
        assert!(result.is_err());
        assert_eq!(store.booking("b4").unwrap().status, BookingStatus::Pending);

        BookingService::new(&mut store)
            .suggest_new_time("b4", "Wednesday at 2 PM works better")
            .unwrap();
        assert_eq!(
            store.booking("b4").unwrap().status,
            BookingStatus::Rescheduled
        );
    }

    #[test]
    fn test_open_slots_follow_availability() {
        let store = seeded();
        // 2026-03-02 is a Monday; m1 is available 9-12 and 14-17.
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let hours: Vec<u8> = (9..=18).collect();
        let slots = open_slots(&store, "m1", monday, &hours);
        assert_eq!(slots, vec![9, 10, 11, 14, 15, 16]);
    }

    #[test]
    fn test_open_slots_exclude_confirmed_bookings() {
        let mut store = seeded();
        // Seeded confirmed booking b1: m1 on Thursday 2026-02-26, 14:00-15:00.
        // Thursday has no availability yet, so declare some around it.
        let block =
            crate::models::availability::AvailabilityBlock::new("t1", "m1", 4, 13, 17).unwrap();
        let mut blocks = store.availability_for_mentor("m1");
        blocks.push(block);
        store.replace_availability("m1", blocks);

        let thursday = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        let hours: Vec<u8> = (13..=16).collect();
        let slots = open_slots(&store, "m1", thursday, &hours);
        assert_eq!(slots, vec![13, 15, 16]);
    }
}
