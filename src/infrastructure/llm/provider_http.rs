use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::application::ports::ProviderClientError;
use crate::infrastructure::observability::sanitize_for_log;

/// Sends one request, no retries. Transport failures and non-2xx statuses are
/// reported separately so callers can tell an unreachable backend from a
/// rejected request.
pub(super) async fn send_request(
    request: RequestBuilder,
    provider: &'static str,
) -> Result<String, ProviderClientError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!(
            provider,
            error = %e,
            timed_out = e.is_timeout(),
            "Provider connection error"
        );
        ProviderClientError::Unreachable(e.to_string())
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            provider,
            status = status.as_u16(),
            body = %sanitize_for_log(&body),
            "Provider returned error status"
        );
        return Err(ProviderClientError::Request {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await.map_err(|e| {
        tracing::error!(provider, error = %e, "Failed to read provider response");
        ProviderClientError::Unreachable(format!("failed to read response body: {e}"))
    })?;

    tracing::debug!(provider, body = %sanitize_for_log(&body), "Provider response received");

    Ok(body)
}

pub(super) fn parse_envelope<T: DeserializeOwned>(
    body: &str,
    provider: &'static str,
) -> Result<T, ProviderClientError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            provider,
            raw_response = %sanitize_for_log(body),
            "Failed to parse provider JSON"
        );
        ProviderClientError::InvalidResponse(format!("malformed response envelope: {e}"))
    })
}
