//! UI state transitions for clients that keep panel state themselves.

use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::card::CardId;
use crate::services::ui_state::{UiEvent, UiState};

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    #[serde(default)]
    pub state: UiState,
    pub event: UiEvent,
    /// Items behind each card; cards left out are assumed non-empty.
    #[serde(default)]
    pub item_counts: BTreeMap<CardId, usize>,
}

/// POST /api/ui/transition — apply one event to a UI state.
pub async fn transition(
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UiState>>, AppError> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let mut state = body.state;
    state.apply(body.event, &body.item_counts);
    Ok(ApiResponse::success(state))
}
