//! Summary panel outcome: populated, or failed with a cause.

use serde::Serialize;

use crate::errors::FetchError;
use crate::models::card::CardId;
use crate::models::stats::ViewModel;

/// State of the summary panel for one mount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelState {
    Ready { view: ViewModel },
    Failed { cause: String, missing_credential: bool },
}

/// Count shown on one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub card: CardId,
    pub title: &'static str,
    pub count: i64,
}

impl PanelState {
    /// Panel state after a fetch cycle settles. The view model is replaced
    /// wholesale on success; any failure yields no cards at all.
    pub fn from_fetch(result: Result<ViewModel, FetchError>) -> Self {
        match result {
            Ok(view) => Self::Ready { view },
            Err(e) => Self::Failed {
                missing_credential: matches!(e, FetchError::MissingCredential),
                cause: e.to_string(),
            },
        }
    }

    pub fn view(&self) -> Option<&ViewModel> {
        match self {
            Self::Ready { view } => Some(view),
            _ => None,
        }
    }

    /// Cards to render, in panel order. Empty unless the cycle succeeded.
    pub fn cards(&self) -> Vec<CardSummary> {
        let Some(view) = self.view() else {
            return Vec::new();
        };
        CardId::ALL
            .into_iter()
            .map(|card| CardSummary {
                card,
                title: card.title(),
                count: view.count(card),
            })
            .collect()
    }
}
