mod pdf_text_extractor;
mod provider_client;

pub use pdf_text_extractor::{PdfExtractionError, PdfTextExtractor};
pub use provider_client::{ProviderClient, ProviderClientError};
