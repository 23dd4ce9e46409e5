//! Dashboard routes: the summary panel page and its JSON counterpart.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::credentials::RequestCredentials;
use crate::models::card::CardId;
use crate::models::stats::ViewModel;
use crate::services::panel::PanelState;
use crate::services::ui_state::UiState;
use crate::views::panel::{DashboardPage, PanelView};
use crate::views::render;
use crate::AppState;

/// UI state carried in the dashboard URL: `?open=<card>&expanded=<card>,<card>`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub open: Option<String>,
    pub expanded: Option<String>,
}

impl DashboardQuery {
    /// Decode the query into UI state, skipping card ids that do not exist.
    pub fn ui_state(&self) -> UiState {
        let mut ui = UiState::new();
        ui.active = self.open.as_deref().and_then(parse_card);
        if let Some(list) = &self.expanded {
            for card in list.split(',').filter(|s| !s.is_empty()).filter_map(parse_card) {
                ui.expanded.insert(card, true);
            }
        }
        ui
    }
}

fn parse_card(s: &str) -> Option<CardId> {
    s.trim()
        .parse()
        .map_err(|e: String| tracing::warn!(error = %e, "Ignoring card in dashboard query"))
        .ok()
}

/// GET / — shell with the summary panel.
pub async fn page(
    State(state): State<AppState>,
    credentials: RequestCredentials,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    render_dashboard(&state, &credentials, &query).await
}

/// Run one fetch cycle and render the dashboard page from its outcome.
pub(crate) async fn render_dashboard(
    state: &AppState,
    credentials: &RequestCredentials,
    query: &DashboardQuery,
) -> Result<Html<String>, AppError> {
    let ui = query.ui_state();
    let panel = PanelState::from_fetch(state.stats.fetch_cycle(credentials).await);
    let page = DashboardPage::new(PanelView::new(&panel, &ui));
    Ok(Html(render(&page)?))
}

/// GET /api/summary — the view model from one fetch cycle.
pub async fn summary(
    State(state): State<AppState>,
    credentials: RequestCredentials,
) -> Result<Json<ApiResponse<ViewModel>>, AppError> {
    let view = state.stats.fetch_cycle(&credentials).await?;
    Ok(ApiResponse::success(view))
}
