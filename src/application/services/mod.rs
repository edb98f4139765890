mod document_normalizer;
mod invoice_prompt;
mod invoice_service;
mod result_extractor;

pub use document_normalizer::{DocumentNormalizer, NormalizeError};
pub use invoice_prompt::build_invoice_prompt;
pub use invoice_service::{InvoiceProcessingError, InvoiceService};
pub use result_extractor::{ExtractionError, ResultExtractor, TOTAL_TOLERANCE};
