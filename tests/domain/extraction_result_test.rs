use pretty_assertions::assert_eq;

use parser_factura::domain::{DocumentKind, ExtractionResult, InvoiceClass, InvoiceData, LineItem};

#[test]
fn given_spanish_ok_payload_when_deserializing_then_maps_every_field() {
    let raw = r#"{
        "status": "OK",
        "nombre": "Juan Pérez",
        "entidad": "Edenor S.A.",
        "fecha": "2024-05-10",
        "tipoComprobante": "Factura",
        "tipo_factura": "B",
        "nro_factura": "0003-00012345",
        "items": [{"cantidad": 2, "descripcion": "Resma A4", "importe": 1500.5}],
        "importe": 1500.5
    }"#;

    let result: ExtractionResult = serde_json::from_str(raw).unwrap();

    assert_eq!(
        result,
        ExtractionResult::Ok(InvoiceData {
            payer: Some("Juan Pérez".to_string()),
            issuer: Some("Edenor S.A.".to_string()),
            issue_date: Some("2024-05-10".to_string()),
            document_kind: DocumentKind::Invoice,
            invoice_class: Some(InvoiceClass::B),
            document_number: Some("0003-00012345".to_string()),
            line_items: vec![LineItem {
                quantity: 2.0,
                description: "Resma A4".to_string(),
                amount: 1500.5,
            }],
            total_amount: 1500.5,
        })
    );
}

#[test]
fn given_english_keys_when_deserializing_then_aliases_are_accepted() {
    let raw = r#"{"status":"OK","documentKind":"Receipt","totalAmount":10,"lineItems":[{"amount":10}]}"#;

    let result: ExtractionResult = serde_json::from_str(raw).unwrap();

    let ExtractionResult::Ok(data) = result else {
        panic!("expected OK result");
    };
    assert_eq!(data.document_kind, DocumentKind::Receipt);
    assert_eq!(data.total_amount, 10.0);
    assert_eq!(data.line_items.len(), 1);
    assert_eq!(data.line_items[0].amount, 10.0);
}

#[test]
fn given_error_payload_when_deserializing_then_reads_motivo_as_reason() {
    let raw = r#"{"status":"ERROR","motivo":"El documento no es un comprobante de pago válido."}"#;

    let result: ExtractionResult = serde_json::from_str(raw).unwrap();

    assert_eq!(
        result,
        ExtractionResult::error("El documento no es un comprobante de pago válido.")
    );
}

#[test]
fn given_null_optional_fields_when_deserializing_then_falls_back_to_defaults() {
    let raw = r#"{
        "status": "OK",
        "nombre": null,
        "fecha": null,
        "tipoComprobante": null,
        "tipo_factura": null,
        "items": [{"cantidad": null, "descripcion": null, "importe": null}],
        "importe": null
    }"#;

    let result: ExtractionResult = serde_json::from_str(raw).unwrap();

    let ExtractionResult::Ok(data) = result else {
        panic!("expected OK result");
    };
    assert_eq!(data.payer, None);
    assert_eq!(data.issue_date, None);
    assert_eq!(data.document_kind, DocumentKind::Other);
    assert_eq!(data.invoice_class, None);
    assert_eq!(data.line_items, vec![LineItem::default()]);
    assert_eq!(data.total_amount, 0.0);
}

#[test]
fn given_empty_or_unknown_invoice_letter_when_deserializing_then_class_is_none() {
    for letter in [r#""""#, r#""X""#, "7"] {
        let raw = format!(r#"{{"status":"OK","tipoComprobante":"Ticket","tipo_factura":{letter}}}"#);

        let result: ExtractionResult = serde_json::from_str(&raw).unwrap();

        let ExtractionResult::Ok(data) = result else {
            panic!("expected OK result for {letter}");
        };
        assert_eq!(data.invoice_class, None);
    }
}

#[test]
fn given_lowercase_invoice_letter_when_deserializing_then_maps_class() {
    let raw = r#"{"status":"OK","tipo_factura":" c "}"#;

    let result: ExtractionResult = serde_json::from_str(raw).unwrap();

    let ExtractionResult::Ok(data) = result else {
        panic!("expected OK result");
    };
    assert_eq!(data.invoice_class, Some(InvoiceClass::C));
}

#[test]
fn given_numbers_sent_as_strings_when_deserializing_then_parses_them() {
    let raw = r#"{
        "status": "OK",
        "items": [{"cantidad": "1", "descripcion": "Gasas", "importe": "1234,50"}],
        "importe": " 1.234,50 "
    }"#;

    let result: ExtractionResult = serde_json::from_str(raw).unwrap();

    let ExtractionResult::Ok(data) = result else {
        panic!("expected OK result");
    };
    assert_eq!(data.line_items[0].quantity, 1.0);
    assert_eq!(data.line_items[0].amount, 1234.5);
    assert_eq!(data.total_amount, 1234.5);
}

#[test]
fn given_non_numeric_amount_text_when_deserializing_then_fails() {
    let raw = r#"{"status":"OK","importe":"mil pesos"}"#;

    let result = serde_json::from_str::<ExtractionResult>(raw);

    assert!(result.is_err());
}

#[test]
fn given_ok_result_when_serializing_then_uses_wire_keys() {
    let result = ExtractionResult::Ok(InvoiceData {
        payer: Some("Ana".to_string()),
        document_kind: DocumentKind::Ticket,
        line_items: vec![LineItem {
            quantity: 1.0,
            description: "Ibuprofeno".to_string(),
            amount: 99.0,
        }],
        total_amount: 99.0,
        ..InvoiceData::default()
    });

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "OK");
    assert_eq!(json["nombre"], "Ana");
    assert_eq!(json["tipoComprobante"], "Ticket");
    assert_eq!(json["items"][0]["descripcion"], "Ibuprofeno");
    assert_eq!(json["items"][0]["importe"], 99.0);
    assert_eq!(json["importe"], 99.0);
    assert!(json.get("tipo_factura").is_none());
}

#[test]
fn given_error_result_when_serializing_then_emits_status_and_motivo_only() {
    let json = serde_json::to_value(ExtractionResult::error("sin documento")).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"status": "ERROR", "motivo": "sin documento"})
    );
}

#[test]
fn given_line_items_when_summing_then_returns_item_total() {
    let data = InvoiceData {
        line_items: vec![
            LineItem {
                amount: 40.0,
                ..LineItem::default()
            },
            LineItem {
                amount: 59.5,
                ..LineItem::default()
            },
        ],
        ..InvoiceData::default()
    };

    assert_eq!(data.items_total(), 99.5);
}
