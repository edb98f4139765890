use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{PdfExtractionError, PdfTextExtractor};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text extraction over `pdf-extract`, run on the blocking pool.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_blocking(data: &[u8]) -> Result<String, PdfExtractionError> {
        std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data))
            .map_err(|_| {
                PdfExtractionError::ExtractionFailed("panic during PDF parsing".to_string())
            })?
            .map_err(|e| PdfExtractionError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PdfTextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<String, PdfExtractionError> {
        let data_owned = data.to_vec();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_blocking(&data_owned)),
        )
        .await
        .map_err(|_| PdfExtractionError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| PdfExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&text);
        tracing::info!(text_length = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
