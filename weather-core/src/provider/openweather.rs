use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::ProviderConfig,
    error::WeatherError,
    model::{UnitSystem, WeatherQuery, WeatherReading},
};

use super::WeatherProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather current-weather endpoint.
///
/// One outbound call per lookup; no retries, no caching. The endpoint comes
/// from [`ProviderConfig`], so tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: ProviderConfig,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for the weather provider")?;

        Ok(Self { config, http })
    }

    /// Query parameters for one lookup, exactly as the provider expects them.
    fn request_params<'a>(&'a self, query: &'a WeatherQuery) -> [(&'static str, &'a str); 3] {
        [
            ("appid", self.config.api_key.as_str()),
            ("q", query.place.as_str()),
            ("units", query.units.as_str()),
        ]
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherReading, WeatherError> {
        log::debug!("Requesting current weather for {:?} ({})", query.place, query.units);

        let res = self
            .http
            .get(&self.config.api_url)
            .query(&self.request_params(query))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Fetch(provider_error_message(status, &body)));
        }

        log::debug!("Provider payload for {:?}: {}", query.place, truncate_body(&body));

        let payload: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            WeatherError::UpstreamDataShape(format!(
                "could not parse current-weather JSON: {e}"
            ))
        })?;

        reading_from_payload(payload, query.units)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, WeatherError> {
        self.fetch_current(query).await
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    sys: OwSys,
}

/// Error payloads look like `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

/// Reshape a provider payload into the one normalized reading both the
/// single-city and the comparison flow consume. Fails on anything missing;
/// a made-up temperature or sunrise would be worse than an error page.
fn reading_from_payload(
    payload: OwCurrentResponse,
    units: UnitSystem,
) -> Result<WeatherReading, WeatherError> {
    let description = payload
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| {
            WeatherError::UpstreamDataShape("payload carried no weather conditions".to_string())
        })?;

    let sunrise = unix_to_local(payload.sys.sunrise).ok_or_else(|| {
        WeatherError::UpstreamDataShape(format!(
            "sunrise timestamp {} is out of range",
            payload.sys.sunrise
        ))
    })?;
    let sunset = unix_to_local(payload.sys.sunset).ok_or_else(|| {
        WeatherError::UpstreamDataShape(format!(
            "sunset timestamp {} is out of range",
            payload.sys.sunset
        ))
    })?;

    Ok(WeatherReading {
        place: payload.name,
        description,
        temperature: payload.main.temp,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
        sunrise,
        sunset,
        unit_label: units.label(),
    })
}

/// Prefer the provider's own message ("city not found") over a raw body dump.
fn provider_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(err) => format!("provider returned {status}: {}", err.message),
        Err(_) => format!("provider returned {status}: {}", truncate_body(body)),
    }
}

fn unix_to_local(ts: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(&Local))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
