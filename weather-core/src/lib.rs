//! Core library for the weather query service.
//!
//! This crate defines:
//! - Provider configuration (API key, endpoint)
//! - Shared domain models (queries, readings, reports) and typed errors
//! - The provider abstraction and its OpenWeather implementation
//! - The report builders shared by the single-city and comparison flows
//!
//! It is used by `weather-web`, but can also be reused by other frontends.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;

pub use config::ProviderConfig;
pub use error::WeatherError;
pub use model::{ComparisonReport, UnitSystem, WeatherQuery, WeatherReading, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
