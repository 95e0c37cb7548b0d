use chrono::{Duration, Utc};
use icalendar::{Calendar, Component, Event, EventLike};

use crate::models::FitnessClass;

#[derive(Clone, Default)]
pub struct ScheduleExporter;

impl ScheduleExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, classes: &[FitnessClass]) -> Vec<u8> {
        if classes.is_empty() {
            return Vec::new();
        }

        let mut calendar = Calendar::new();
        calendar.name("Fitness Studio Schedule");

        for class in classes {
            let start = class.schedule.with_timezone(&Utc);
            let end = start + Duration::hours(1);

            let mut event = Event::new();
            event.summary(&class.name);
            event.starts(start);
            event.ends(end);
            event.description(&format!(
                "Instructor: {}\nCapacity: {}",
                class.instructor, class.capacity
            ));
            event.uid(&format!(
                "class-{}-{}-studio-schedule",
                class.id,
                start.format("%Y%m%dT%H%M%SZ")
            ));
            calendar.push(event);
        }

        calendar.to_string().into_bytes()
    }
}
