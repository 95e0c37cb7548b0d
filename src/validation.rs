use std::str::FromStr;

use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;
use crate::models::BookingRequest;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("regex compiles"));

pub fn parse_timezone(value: &str) -> Result<Tz, ApiError> {
    Tz::from_str(value).map_err(|_| ApiError::BadRequest("Invalid timezone".into()))
}

pub fn validate_booking_request(request: &BookingRequest) -> Result<(), ApiError> {
    if request.class_id == 0 {
        return Err(ApiError::BadRequest("class_id must be positive".into()));
    }
    let name_len = request.client_name.chars().count();
    if !(2..=50).contains(&name_len) {
        return Err(ApiError::BadRequest(
            "client_name must be between 2 and 50 characters".into(),
        ));
    }
    if !EMAIL_RE.is_match(&request.client_email) {
        return Err(ApiError::BadRequest(
            "client_email must be a valid email address".into(),
        ));
    }
    Ok(())
}
