/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub default_level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of `json_format`.
    pub fn new(environment: &str, default_level: &str, json_format: bool) -> Self {
        Self {
            environment: environment.to_string(),
            default_level: default_level.to_string(),
            json_format: json_format || log_format_is_json(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            default_level: "info".to_string(),
            json_format: log_format_is_json(),
        }
    }
}

fn log_format_is_json() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false)
}
