pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::services::stats_client::StatsClient;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub stats: StatsClient,
}

impl AppState {
    pub fn from_config(config: config::AppConfig) -> Result<Self, reqwest::Error> {
        let stats = StatsClient::new(&config)?;
        Ok(Self { config, stats })
    }
}

/// Build the full router: dashboard, JSON API and health. Every other path
/// goes through the screen table.
pub fn app(state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .route("/summary", get(routes::dashboard::summary))
        .route("/ui/transition", post(routes::ui::transition))
        .fallback(routes::api::not_found);

    Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/", get(routes::dashboard::page))
        .nest("/api", api)
        .fallback(routes::shell::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
