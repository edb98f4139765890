mod invoice;
mod status;

pub use invoice::{DOCUMENT_FIELD, process_invoice_handler};
pub use status::{SERVICE_NAME, StatusResponse, status_handler};
