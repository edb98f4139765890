use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{process_invoice_handler, status_handler};
use crate::presentation::state::AppState;

pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let cors = cors_layer(&state.cors);

    let router = Router::new()
        .route("/status", get(status_handler))
        .route("/procesar-factura", post(process_invoice_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer);

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> Option<CorsLayer> {
    if !settings.enabled {
        return None;
    }

    let origin = if settings.origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(settings.origin.trim()) {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(e) => {
                tracing::warn!(origin = %settings.origin, error = %e, "Invalid CORS origin, CORS disabled");
                return None;
            }
        }
    };

    tracing::info!(origin = %settings.origin, "CORS enabled");

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
