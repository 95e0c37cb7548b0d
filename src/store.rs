use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::{Booking, ClassView, FitnessClass};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Class not found")]
    ClassNotFound,
    #[error("No slots available")]
    NoSlotsAvailable,
    #[error("Already booked for this class")]
    DuplicateBooking,
}

/// In-memory class catalog and booking ledger. Lives for the process
/// lifetime; callers share it behind a mutex so the booking sequence stays
/// atomic.
pub struct StudioStore {
    classes: Vec<FitnessClass>,
    bookings: Vec<Booking>,
}

impl StudioStore {
    pub fn new(classes: Vec<FitnessClass>) -> Self {
        Self {
            classes,
            bookings: Vec::new(),
        }
    }

    /// Store preloaded with the studio's class roster, scheduled in the
    /// studio timezone.
    pub fn seeded(studio_tz: Tz) -> Self {
        let schedule = |hour: u32| {
            studio_tz
                .with_ymd_and_hms(2025, 8, 22, hour, 0, 0)
                .earliest()
                .expect("seed schedule resolves in the studio timezone")
        };
        Self::new(vec![
            FitnessClass {
                id: 1,
                name: "Yoga".to_string(),
                instructor: "Alice".to_string(),
                schedule: schedule(8),
                capacity: 10,
                available_slots: 10,
            },
            FitnessClass {
                id: 2,
                name: "Zumba".to_string(),
                instructor: "Bob".to_string(),
                schedule: schedule(10),
                capacity: 12,
                available_slots: 12,
            },
            FitnessClass {
                id: 3,
                name: "HIIT".to_string(),
                instructor: "Charlie".to_string(),
                schedule: schedule(18),
                capacity: 15,
                available_slots: 15,
            },
        ])
    }

    pub fn classes(&self) -> &[FitnessClass] {
        &self.classes
    }

    pub fn class_views(&self, target_tz: Tz) -> Vec<ClassView> {
        self.classes
            .iter()
            .map(|class| ClassView {
                id: class.id,
                name: class.name.clone(),
                instructor: class.instructor.clone(),
                schedule: class
                    .schedule
                    .with_timezone(&target_tz)
                    .format("%Y-%m-%d %H:%M:%S %Z%z")
                    .to_string(),
                capacity: class.capacity,
                available_slots: class.available_slots,
            })
            .collect()
    }

    // Checks run in a fixed order: existence, capacity, duplicate. The first
    // failing check decides the reported error.
    pub fn create_booking(
        &mut self,
        class_id: u32,
        client_name: &str,
        client_email: &str,
    ) -> Result<Booking, BookingError> {
        let class_idx = self
            .classes
            .iter()
            .position(|c| c.id == class_id)
            .ok_or(BookingError::ClassNotFound)?;
        if self.classes[class_idx].available_slots == 0 {
            return Err(BookingError::NoSlotsAvailable);
        }
        if self
            .bookings
            .iter()
            .any(|b| b.class_id == class_id && b.client_email == client_email)
        {
            return Err(BookingError::DuplicateBooking);
        }

        let class = &mut self.classes[class_idx];
        let booking = Booking {
            // Sequential ids hold only while bookings are never removed; a
            // cancel feature would need an independent counter.
            id: (self.bookings.len() + 1) as u32,
            class_id: class.id,
            class_name: class.name.clone(),
            client_name: client_name.to_string(),
            client_email: client_email.to_string(),
            booking_time: Utc::now(),
        };
        self.bookings.push(booking.clone());
        class.available_slots -= 1;
        Ok(booking)
    }

    pub fn bookings_for(&self, email: Option<&str>) -> Vec<Booking> {
        match email {
            None => self.bookings.clone(),
            Some(email) => self
                .bookings
                .iter()
                .filter(|b| b.client_email == email)
                .cloned()
                .collect(),
        }
    }
}
