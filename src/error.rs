use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::store::BookingError;

const INTERNAL_DETAIL: &str = "Internal server error. Please try again later.";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    // Boundary catch-all: record the real failure, answer with a message
    // that leaks nothing.
    pub(crate) fn internal<E: std::fmt::Display>(err: E) -> Self {
        error!("unexpected error: {err}");
        ApiError::Internal(INTERNAL_DETAIL.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(value: BookingError) -> Self {
        match value {
            BookingError::ClassNotFound => ApiError::NotFound(value.to_string()),
            BookingError::NoSlotsAvailable | BookingError::DuplicateBooking => {
                ApiError::BadRequest(value.to_string())
            }
        }
    }
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    error!("unhandled panic: {detail}");
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL).into_response()
}
