use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::ExtractionResult;
use crate::presentation::state::AppState;

pub const DOCUMENT_FIELD: &str = "documento";

const MISSING_DOCUMENT: &str = "No se proporcionó ningún documento";

/// Business rejections from the model (`status: "ERROR"`) are still a 200;
/// only pipeline failures become a 500.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_invoice_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let (filename, content_type, data) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(DOCUMENT_FIELD) => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                match field.bytes().await {
                    Ok(data) => break (filename, content_type, data),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read document bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            &format!("No se pudo leer el documento: {e}"),
                        );
                    }
                }
            }
            Ok(Some(field)) => {
                tracing::debug!(name = ?field.name(), "Skipping multipart field");
            }
            Ok(None) => {
                tracing::warn!("Invoice request with no document");
                return error_response(StatusCode::BAD_REQUEST, MISSING_DOCUMENT);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("No se pudo leer el formulario: {e}"),
                );
            }
        }
    };

    tracing::info!(
        filename = %filename,
        content_type = %content_type,
        bytes = data.len(),
        "Document received for processing"
    );

    match state.invoice_service.process(&data, &content_type).await {
        Ok(result) => {
            tracing::info!(status = result.status(), "Invoice processed");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to process invoice");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error interno: {e}"),
            )
        }
    }
}

fn error_response(status: StatusCode, reason: &str) -> Response {
    (status, Json(ExtractionResult::error(reason))).into_response()
}
