use std::fmt;

use base64::{Engine as _, engine::general_purpose};

use crate::application::ports::ProviderClientError;
use crate::domain::PDF_MIME;

const PREVIEW_CHARS: usize = 100;

/// Inline `data:<mime>;base64,<payload>` form of a document.
///
/// Images and PDFs are both sent this way; the target models accept either
/// as vision input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    payload: String,
}

impl DataUrl {
    pub fn encode(document: &[u8], content_type: &str) -> Result<Self, ProviderClientError> {
        if !content_type.starts_with("image/") && content_type != PDF_MIME {
            return Err(ProviderClientError::UnsupportedMedia(
                content_type.to_string(),
            ));
        }

        if document.is_empty() {
            return Err(ProviderClientError::Encoding(
                "document is empty".to_string(),
            ));
        }

        let payload = general_purpose::STANDARD.encode(document);
        if payload.is_empty() {
            return Err(ProviderClientError::Encoding(
                "base64 encoding produced no output".to_string(),
            ));
        }

        Ok(Self {
            mime_type: content_type.to_string(),
            payload,
        })
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// First characters of the URL, enough to identify it in logs.
    pub fn preview(&self) -> String {
        let prefix = format!("data:{};base64,", self.mime_type);
        let remaining = PREVIEW_CHARS
            .saturating_sub(prefix.len())
            .min(self.payload.len());
        // base64 is ASCII, any byte index is a char boundary
        format!("{prefix}{}...", &self.payload[..remaining])
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}
