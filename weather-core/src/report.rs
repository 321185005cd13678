use chrono::Local;

use crate::{
    error::WeatherError,
    model::{ComparisonReport, UnitSystem, WeatherQuery, WeatherReport},
    provider::WeatherProvider,
};

/// Build the single-city report: one fetch, stamped with the server's
/// current local time, echoing the requested city and units back for display.
pub async fn single_city(
    provider: &dyn WeatherProvider,
    city: &str,
    units: UnitSystem,
) -> Result<WeatherReport, WeatherError> {
    let query = WeatherQuery { place: city.to_string(), units };
    let reading = provider.current_weather(&query).await?;

    Ok(WeatherReport { date: Local::now(), city: query.place, units, reading })
}

/// Build the two-city comparison. Both lookups share one unit system and run
/// concurrently. Either failure fails the whole comparison; no partial
/// result is rendered.
pub async fn comparison(
    provider: &dyn WeatherProvider,
    city1: &str,
    city2: &str,
    units: UnitSystem,
) -> Result<ComparisonReport, WeatherError> {
    let first_query = WeatherQuery { place: city1.to_string(), units };
    let second_query = WeatherQuery { place: city2.to_string(), units };

    let (first, second) = tokio::try_join!(
        provider.current_weather(&first_query),
        provider.current_weather(&second_query),
    )?;

    Ok(ComparisonReport { date: Local::now(), unit_label: units.label(), first, second })
}
