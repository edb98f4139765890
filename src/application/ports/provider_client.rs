use async_trait::async_trait;

use crate::domain::ProviderResponse;

/// A vision-capable model backend that turns a document plus an instruction
/// prompt into generated text.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn process_document(
        &self,
        document: &[u8],
        content_type: &str,
        prompt: &str,
    ) -> Result<ProviderResponse, ProviderClientError>;

    /// Stable provider name, used in logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderClientError {
    #[error("unsupported content type for provider: {0}")]
    UnsupportedMedia(String),
    #[error("document could not be encoded: {0}")]
    Encoding(String),
    #[error("provider unreachable: {0}")]
    Unreachable(String),
    #[error("provider returned {status}: {body}")]
    Request { status: u16, body: String },
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}
