use std::sync::Arc;

use crate::application::ports::{PdfExtractionError, PdfTextExtractor};
use crate::domain::{PDF_MIME, ProcessedDocument};

pub struct DocumentNormalizer {
    pdf_extractor: Arc<dyn PdfTextExtractor>,
}

impl DocumentNormalizer {
    pub fn new(pdf_extractor: Arc<dyn PdfTextExtractor>) -> Self {
        Self { pdf_extractor }
    }

    /// PDFs go through text extraction; a failed extraction fails the
    /// request rather than falling back to image mode.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn normalize(
        &self,
        data: &[u8],
        content_type: &str,
    ) -> Result<ProcessedDocument, NormalizeError> {
        if content_type == PDF_MIME {
            let text = self
                .pdf_extractor
                .extract_text(data)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "PDF text extraction failed");
                    NormalizeError::DocumentProcessing(e)
                })?;

            tracing::info!(text_length = text.len(), "PDF processed");
            return Ok(ProcessedDocument::from_text(text, content_type));
        }

        if content_type.starts_with("image/") {
            tracing::info!(content_type, "Image received for processing");
            return Ok(ProcessedDocument::from_image(data.to_vec(), content_type));
        }

        tracing::warn!(content_type, "Unsupported content type");
        Err(NormalizeError::UnsupportedMedia(content_type.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("unsupported content type: {0}")]
    UnsupportedMedia(String),
    #[error("failed to process document: {0}")]
    DocumentProcessing(#[source] PdfExtractionError),
}
