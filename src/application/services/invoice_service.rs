use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{PdfTextExtractor, ProviderClient, ProviderClientError};
use crate::domain::{DocumentPayload, ExtractionResult};

use super::document_normalizer::{DocumentNormalizer, NormalizeError};
use super::invoice_prompt::build_invoice_prompt;
use super::result_extractor::{ExtractionError, ResultExtractor};

/// One upload, one provider call: normalize, ask the model, parse the answer.
pub struct InvoiceService {
    normalizer: DocumentNormalizer,
    provider: Arc<dyn ProviderClient>,
    extractor: ResultExtractor,
}

impl InvoiceService {
    pub fn new(pdf_extractor: Arc<dyn PdfTextExtractor>, provider: Arc<dyn ProviderClient>) -> Self {
        Self {
            normalizer: DocumentNormalizer::new(pdf_extractor),
            provider,
            extractor: ResultExtractor::new(),
        }
    }

    pub fn provider(&self) -> Arc<dyn ProviderClient> {
        Arc::clone(&self.provider)
    }

    #[tracing::instrument(skip(self, data), fields(provider = self.provider.name(), bytes = data.len()))]
    pub async fn process(
        &self,
        data: &[u8],
        content_type: &str,
    ) -> Result<ExtractionResult, InvoiceProcessingError> {
        let processed = self.normalizer.normalize(data, content_type).await?;

        // Vision models read the PDF itself; the extracted text only proves it parses.
        let document = match &processed.payload {
            DocumentPayload::Image(bytes) => bytes.as_slice(),
            DocumentPayload::ExtractedText(text) => {
                tracing::debug!(text_length = text.len(), "Forwarding original PDF bytes");
                data
            }
        };

        let prompt = build_invoice_prompt(Utc::now());
        let response = self
            .provider
            .process_document(document, &processed.content_type, &prompt)
            .await?;

        Ok(self.extractor.extract(&response.content)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InvoiceProcessingError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Provider(#[from] ProviderClientError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
