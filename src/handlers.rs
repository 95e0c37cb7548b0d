use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    models::{Booking, BookingRequest, ClassView},
    validation::{parse_timezone, validate_booking_request},
};

#[derive(Debug, serde::Deserialize)]
pub struct ClassesQuery {
    pub timezone: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

#[utoipa::path(get, path = "/", tag = "classes")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Fitness Studio Booking API",
        "endpoints": {
            "/classes": "List classes with schedules in a requested timezone",
            "/classes.ical": "Download the class schedule as an iCal file",
            "/book": "Book a slot in a class",
            "/bookings": "List bookings, optionally filtered by email"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "classes")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "classes")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/classes",
    params(
        ("timezone" = Option<String>, Query, description = "IANA timezone for schedule rendering (defaults to the studio zone)")
    ),
    responses(
        (status = 200, description = "List of classes", body = [ClassView]),
        (status = 400, description = "Invalid timezone")
    ),
    tag = "classes"
)]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let tz_name = query
        .timezone
        .unwrap_or_else(|| state.settings.studio_timezone.clone());
    let target_tz = parse_timezone(&tz_name)?;

    let store = state.store.lock().map_err(ApiError::internal)?;
    let views = store.class_views(target_tz);
    info!(count = views.len(), timezone = %tz_name, "returned classes");
    Ok(Json(views))
}

#[utoipa::path(
    get,
    path = "/classes.ical",
    responses(
        (status = 200, description = "Class schedule as iCal", content_type = "text/calendar")
    ),
    tag = "classes"
)]
pub async fn get_schedule_ical(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.lock().map_err(ApiError::internal)?;
    let body = state.exporter.generate(store.classes());
    Ok((
        StatusCode::OK,
        [
            ("content-type", "text/calendar"),
            (
                "content-disposition",
                "attachment; filename=studio_schedule.ics",
            ),
        ],
        body,
    ))
}

#[utoipa::path(
    post,
    path = "/book",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Created booking", body = Booking),
        (status = 400, description = "No slots available, duplicate booking or malformed request"),
        (status = 404, description = "Class not found")
    ),
    tag = "bookings"
)]
pub async fn book_class(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_booking_request(&request)?;

    // lookup, capacity check, duplicate check, append and decrement all
    // happen under this one lock
    let mut store = state.store.lock().map_err(ApiError::internal)?;
    let booking =
        store.create_booking(request.class_id, &request.client_name, &request.client_email)?;
    info!(client = %booking.client_email, class = %booking.class_name, "booking created");
    Ok(Json(booking))
}

#[utoipa::path(
    get,
    path = "/bookings",
    params(
        ("email" = Option<String>, Query, description = "Return only bookings for this email (exact match)")
    ),
    responses(
        (status = 200, description = "List of bookings", body = [Booking])
    ),
    tag = "bookings"
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.lock().map_err(ApiError::internal)?;
    let result = store.bookings_for(query.email.as_deref());
    info!(count = result.len(), email = ?query.email, "returned bookings");
    Ok(Json(result))
}
