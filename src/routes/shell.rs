//! Shell routing: every path outside the API is resolved through the screen
//! table and mounted into the content region.

use axum::{
    extract::{OriginalUri, Query, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::errors::AppError;
use crate::middleware::credentials::RequestCredentials;
use crate::models::screen::Screen;
use crate::routes::{api, dashboard};
use crate::views::layout::ScreenPage;
use crate::views::render;
use crate::AppState;

use super::dashboard::DashboardQuery;

/// Fallback for paths without an explicit route.
///
/// Only GET/HEAD render pages. Asset-like paths get a bare 404 and never
/// trigger a fetch cycle.
pub async fn dispatch(
    method: Method,
    OriginalUri(uri): OriginalUri,
    State(state): State<AppState>,
    credentials: RequestCredentials,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, AppError> {
    let path = uri.path();

    if path == "/api" || path.starts_with("/api/") {
        return Ok(api::not_found(OriginalUri(uri.clone())).await.into_response());
    }
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }
    if Screen::is_asset_path(path) {
        tracing::debug!(%path, "No asset served at path");
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    match Screen::resolve(path) {
        Screen::Dashboard => Ok(dashboard::render_dashboard(&state, &credentials, &query)
            .await?
            .into_response()),
        screen => {
            tracing::debug!(%path, ?screen, "Mounting screen");
            Ok(Html(render(&ScreenPage::new(screen))?).into_response())
        }
    }
}
