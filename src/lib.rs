pub mod error;
pub mod handlers;
pub mod ical;
pub mod models;
pub mod openapi;
pub mod settings;
pub mod store;
pub mod validation;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{get, post},
};
use chrono_tz::Tz;
use handlers::{
    book_class, get_bookings, get_classes, get_schedule_ical, healthz_live, healthz_ready, root,
};
use tower_http::LatencyUnit;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::handle_panic;
use crate::ical::ScheduleExporter;
use crate::openapi::ApiDoc;
use crate::settings::Settings;
use crate::store::StudioStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<Mutex<StudioStore>>,
    pub exporter: Arc<ScheduleExporter>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let studio_tz = Tz::from_str(&settings.studio_timezone)
        .map_err(|err| format!("invalid studio timezone: {err}"))?;

    let state = AppState {
        settings: settings.clone(),
        store: Arc::new(Mutex::new(StudioStore::seeded(studio_tz))),
        exporter: Arc::new(ScheduleExporter::new()),
    };

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting Fitness Studio Booking API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/classes", get(get_classes))
        .route("/classes.ical", get(get_schedule_ical))
        .route("/book", post(book_class))
        .route("/bookings", get(get_bookings))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router
        .layer(trace_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
}
