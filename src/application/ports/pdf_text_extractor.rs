use async_trait::async_trait;

#[async_trait]
pub trait PdfTextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<String, PdfExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfExtractionError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
