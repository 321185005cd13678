use anyhow::{Context, Result};
use serde::Deserialize;

/// OpenWeather current-weather endpoint used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Provider credentials and endpoint.
///
/// Built once at startup and handed to the fetcher by value; nothing in the
/// service reads configuration from ambient globals after that.
///
/// Environment variables (after an optional `.env` load in the binary):
/// - `WEATHER_API_KEY`: API key for the provider (required)
/// - `WEATHER_API_URL`: endpoint override, useful for tests (optional)
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ProviderConfig {
    /// Read configuration from `WEATHER_`-prefixed environment variables.
    pub fn from_env() -> Result<Self> {
        envy::prefixed("WEATHER_").from_env::<ProviderConfig>().context(
            "Missing provider config. Required env var: WEATHER_API_KEY \
             (optionally WEATHER_API_URL)",
        )
    }

    /// Configuration pointing at an explicit endpoint, e.g. a mock server.
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), api_url: api_url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: Vec<(String, String)>) -> envy::Result<ProviderConfig> {
        envy::prefixed("WEATHER_").from_iter(vars)
    }

    #[test]
    fn api_url_defaults_to_openweather() {
        let cfg = from_vars(vec![("WEATHER_API_KEY".into(), "KEY".into())])
            .expect("api key alone must be enough");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn api_url_can_be_overridden() {
        let cfg = from_vars(vec![
            ("WEATHER_API_KEY".into(), "KEY".into()),
            ("WEATHER_API_URL".into(), "http://localhost:9999/weather".into()),
        ])
        .expect("both vars set");

        assert_eq!(cfg.api_url, "http://localhost:9999/weather");
    }

    #[test]
    fn missing_api_key_errors() {
        let err = from_vars(vec![]).unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn with_api_url_builds_explicit_config() {
        let cfg = ProviderConfig::with_api_url("KEY", "http://127.0.0.1:1/w");
        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.api_url, "http://127.0.0.1:1/w");
    }
}
