/// Uniform view of an uploaded document after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    pub payload: DocumentPayload,
    pub content_type: String,
}

/// Exactly one representation per document: PDFs carry their extracted text,
/// images carry their raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentPayload {
    ExtractedText(String),
    Image(Vec<u8>),
}

impl ProcessedDocument {
    pub fn from_text(text: String, content_type: &str) -> Self {
        Self {
            payload: DocumentPayload::ExtractedText(text),
            content_type: content_type.to_string(),
        }
    }

    pub fn from_image(bytes: Vec<u8>, content_type: &str) -> Self {
        Self {
            payload: DocumentPayload::Image(bytes),
            content_type: content_type.to_string(),
        }
    }

    pub fn extracted_text(&self) -> Option<&str> {
        match &self.payload {
            DocumentPayload::ExtractedText(text) => Some(text),
            DocumentPayload::Image(_) => None,
        }
    }

    pub fn image_bytes(&self) -> Option<&[u8]> {
        match &self.payload {
            DocumentPayload::Image(bytes) => Some(bytes),
            DocumentPayload::ExtractedText(_) => None,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_MIME
    }
}

pub const PDF_MIME: &str = "application/pdf";
