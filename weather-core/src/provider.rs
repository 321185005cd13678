use crate::{
    error::WeatherError,
    model::{WeatherQuery, WeatherReading},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the report builders and the outside world: anything that can
/// answer a current-weather query for one place.
///
/// The production implementation is [`openweather::OpenWeatherProvider`];
/// tests substitute stubs.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, WeatherError>;
}
