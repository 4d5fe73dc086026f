/// Subscriber settings resolved from application configuration.
///
/// `RUST_LOG` still wins over `default_directive` when set.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub default_directive: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, level: &str, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            default_directive: format!("{level},docsift=debug,tower_http=debug"),
            json_format,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self::new(
            std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            "info",
            json_format,
        )
    }
}
