use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use weather_core::{OpenWeatherProvider, ProviderConfig, WeatherProvider};

use crate::cli::Cli;
use crate::handlers;

/// Shared state for the route handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

/// The three routes of the service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/results", get(handlers::results))
        .route("/comparison_results", get(handlers::comparison_results))
        .with_state(state)
}

pub async fn run(args: Cli) -> anyhow::Result<()> {
    let config = ProviderConfig::from_env()?;
    let provider = OpenWeatherProvider::new(config)?;
    let state = AppState { provider: Arc::new(provider) };

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    log::info!("Listening on http://{}", args.bind);

    axum::serve(listener, router(state)).await.context("HTTP server exited")
}
