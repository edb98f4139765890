use std::sync::Arc;

use parser_factura::application::services::{DocumentNormalizer, NormalizeError};

use crate::helpers::StaticPdfExtractor;

fn normalizer(extractor: StaticPdfExtractor) -> DocumentNormalizer {
    DocumentNormalizer::new(Arc::new(extractor))
}

#[tokio::test]
async fn given_image_content_types_when_normalizing_then_returns_image_bytes_only() {
    let normalizer = normalizer(StaticPdfExtractor::failing());
    let bytes = [0x89, b'P', b'N', b'G'];

    for content_type in ["image/png", "image/jpeg", "image/webp"] {
        let document = normalizer.normalize(&bytes, content_type).await.unwrap();

        assert_eq!(document.image_bytes(), Some(&bytes[..]));
        assert_eq!(document.extracted_text(), None);
        assert_eq!(document.content_type, content_type);
    }
}

#[tokio::test]
async fn given_readable_pdf_when_normalizing_then_returns_extracted_text_only() {
    let normalizer = normalizer(StaticPdfExtractor::with_text("FACTURA B Nro 0001-00000042"));

    let document = normalizer
        .normalize(b"%PDF-1.4 ...", "application/pdf")
        .await
        .unwrap();

    assert_eq!(document.extracted_text(), Some("FACTURA B Nro 0001-00000042"));
    assert_eq!(document.image_bytes(), None);
}

#[tokio::test]
async fn given_corrupted_pdf_when_normalizing_then_returns_document_processing_error() {
    let normalizer = normalizer(StaticPdfExtractor::failing());

    let result = normalizer.normalize(b"not a pdf", "application/pdf").await;

    assert!(matches!(result, Err(NormalizeError::DocumentProcessing(_))));
}

#[tokio::test]
async fn given_other_content_type_when_normalizing_then_returns_unsupported_media_error() {
    let normalizer = normalizer(StaticPdfExtractor::with_text("unused"));

    for content_type in ["text/plain", "application/octet-stream", "video/mp4"] {
        let result = normalizer.normalize(b"data", content_type).await;

        assert!(
            matches!(result, Err(NormalizeError::UnsupportedMedia(ref ct)) if ct == content_type)
        );
    }
}
