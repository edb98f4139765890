use parser_factura::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert_eq!(config.default_level, "info");
}

#[test]
fn given_json_requested_when_creating_then_json_format_is_enabled() {
    let config = TracingConfig::new("prod", "warn", true);
    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
    assert_eq!(config.default_level, "warn");
}
