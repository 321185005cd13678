use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Duration, Local};
use serde::Deserialize;
use weather_core::{UnitSystem, WeatherError, report};

use crate::server::AppState;
use crate::templates::{ComparisonPage, ErrorPage, HomePage, ResultsPage};

/// Query parameters for `/results`. All optional at the extractor level so
/// the handler can name exactly which required field is missing.
#[derive(Debug, Deserialize)]
pub struct ResultsParams {
    pub city: Option<String>,
    pub units: Option<String>,
}

/// Query parameters for `/comparison_results`. The unit system has its own
/// dedicated field and is shared by both cities.
#[derive(Debug, Deserialize)]
pub struct ComparisonParams {
    pub city1: Option<String>,
    pub city2: Option<String>,
    pub units: Option<String>,
}

/// GET `/`: the lookup forms, with the date range the form may offer.
pub async fn home() -> Result<Html<String>, PageError> {
    let now = Local::now();
    let page = HomePage { min_date: now - Duration::days(5), max_date: now };
    Ok(Html(page.render()?))
}

/// GET `/results`: current conditions for one city.
pub async fn results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> Result<Html<String>, PageError> {
    let city = require_param("city", params.city.as_deref())?;
    let units = UnitSystem::from_param(require_param("units", params.units.as_deref())?);

    let report = report::single_city(state.provider.as_ref(), city, units)
        .await
        .inspect_err(|err| log::warn!("weather lookup for {city:?} failed: {err}"))?;

    Ok(Html(ResultsPage { report: &report }.render()?))
}

/// GET `/comparison_results`: relative weather for two cities.
pub async fn comparison_results(
    State(state): State<AppState>,
    Query(params): Query<ComparisonParams>,
) -> Result<Html<String>, PageError> {
    let city1 = require_param("city1", params.city1.as_deref())?;
    let city2 = require_param("city2", params.city2.as_deref())?;
    let units = UnitSystem::from_param(require_param("units", params.units.as_deref())?);

    let report = report::comparison(state.provider.as_ref(), city1, city2, units)
        .await
        .inspect_err(|err| {
            log::warn!("weather comparison for {city1:?}/{city2:?} failed: {err}");
        })?;

    Ok(Html(ComparisonPage { report: &report }.render()?))
}

/// A required parameter counts as present only when non-empty; browsers
/// submit untouched form fields as `?city=`.
fn require_param<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, WeatherError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(WeatherError::MissingParameter(name)),
    }
}

/// Anything a page handler can fail with, mapped onto a rendered error page.
///
/// Missing parameters are the caller's fault (400); provider trouble is
/// reported as a bad gateway (502). A failing report never takes the process
/// down with it.
#[derive(Debug)]
pub enum PageError {
    Weather(WeatherError),
    Render(askama::Error),
}

impl From<WeatherError> for PageError {
    fn from(err: WeatherError) -> Self {
        PageError::Weather(err)
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError::Render(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PageError::Weather(err @ WeatherError::MissingParameter(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            PageError::Weather(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            PageError::Render(err) => {
                log::error!("template rendering failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        let body = ErrorPage { message: &message }
            .render()
            .unwrap_or_else(|_| message.clone());

        (status, Html(body)).into_response()
    }
}
