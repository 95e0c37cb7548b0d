use utoipa::OpenApi;

use crate::models::{Booking, BookingRequest, ClassView};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::get_classes,
        crate::handlers::get_schedule_ical,
        crate::handlers::book_class,
        crate::handlers::get_bookings
    ),
    components(schemas(ClassView, Booking, BookingRequest)),
    tags(
        (name = "classes", description = "Class catalog operations"),
        (name = "bookings", description = "Booking operations")
    )
)]
pub struct ApiDoc;
