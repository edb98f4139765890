mod extraction_result;
mod processed_document;
mod provider_response;

pub use extraction_result::{DocumentKind, ExtractionResult, InvoiceClass, InvoiceData, LineItem};
pub use processed_document::{DocumentPayload, PDF_MIME, ProcessedDocument};
pub use provider_response::ProviderResponse;
