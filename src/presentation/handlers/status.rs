use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "parser-factura-backend";

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

pub async fn status_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "OK",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            service: SERVICE_NAME,
        }),
    )
}
