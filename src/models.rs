use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// The schedule keeps the studio's zone; rendering converts it to whatever
// zone the caller asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessClass {
    pub id: u32,
    pub name: String,
    pub instructor: String,
    pub schedule: DateTime<Tz>,
    pub capacity: u32,
    pub available_slots: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ClassView {
    pub id: u32,
    pub name: String,
    pub instructor: String,
    #[schema(example = "2025-08-22 08:00:00 IST+0530")]
    pub schedule: String,
    pub capacity: u32,
    pub available_slots: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Booking {
    pub id: u32,
    pub class_id: u32,
    pub class_name: String,
    pub client_name: String,
    pub client_email: String,
    #[schema(value_type = String, format = "date-time", example = "2025-08-20T06:15:00Z")]
    pub booking_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookingRequest {
    pub class_id: u32,
    pub client_name: String,
    pub client_email: String,
}
