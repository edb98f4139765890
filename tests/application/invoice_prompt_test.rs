use chrono::{TimeZone, Utc};

use parser_factura::application::services::build_invoice_prompt;

#[test]
fn given_timestamp_when_building_prompt_then_embeds_utc_date_and_buenos_aires_time() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 2, 30, 0).unwrap();

    let prompt = build_invoice_prompt(now);

    assert!(prompt.contains("FECHA Y HORA ACTUAL: 29/02/2024, 23:30:00 (2024-03-01)"));
}

#[test]
fn given_any_timestamp_when_building_prompt_then_describes_the_response_schema() {
    let prompt = build_invoice_prompt(Utc::now());

    for key in [
        "\"status\"",
        "\"motivo\"",
        "\"nombre\"",
        "\"entidad\"",
        "\"fecha\"",
        "\"tipoComprobante\"",
        "\"tipo_factura\"",
        "\"nro_factura\"",
        "\"items\"",
        "\"importe\"",
    ] {
        assert!(prompt.contains(key), "prompt is missing {key}");
    }
    assert!(prompt.contains("nunca undefined"));
}
