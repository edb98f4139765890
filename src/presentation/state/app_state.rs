use std::sync::Arc;

use crate::application::services::InvoiceService;
use crate::presentation::config::CorsSettings;

/// Process-wide, read-only context handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub invoice_service: Arc<InvoiceService>,
    pub cors: CorsSettings,
}
