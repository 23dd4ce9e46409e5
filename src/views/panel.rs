//! Summary panel view data: one card per metric plus its detail surface.

use askama::Template;

use crate::models::card::CardId;
use crate::models::screen::Screen;
use crate::models::stats::{DetailItem, ViewModel};
use crate::services::panel::PanelState;
use crate::services::ui_state::{DetailSurface, UiState};

use super::layout::{nav_links, NavLink};

/// Dashboard URL that encodes `ui` in its query string.
pub fn dashboard_href(ui: &UiState) -> String {
    let mut params = Vec::new();
    if let Some(card) = ui.active {
        params.push(format!("open={card}"));
    }
    let expanded: Vec<&str> = ui
        .expanded
        .iter()
        .filter(|(_, on)| **on)
        .map(|(card, _)| card.dom_id())
        .collect();
    if !expanded.is_empty() {
        params.push(format!("expanded={}", expanded.join(",")));
    }
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

#[derive(Debug, Clone)]
pub struct FailureView {
    pub cause: String,
    pub missing_credential: bool,
    pub retry_href: String,
}

#[derive(Debug, Clone)]
pub struct ToggleLink {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct SurfaceView {
    pub header: &'static str,
    pub open: bool,
    pub items: Vec<DetailItem>,
    pub toggle: Option<ToggleLink>,
}

#[derive(Debug, Clone)]
pub struct CardView {
    pub dom_id: &'static str,
    pub title: &'static str,
    pub count: i64,
    /// Absent when the card has no items to list.
    pub surface: Option<SurfaceView>,
}

/// Everything `panel.html` reads.
#[derive(Debug, Clone)]
pub struct PanelView {
    pub failure: Option<FailureView>,
    pub cards: Vec<CardView>,
}

impl PanelView {
    pub fn new(state: &PanelState, ui: &UiState) -> Self {
        match state {
            PanelState::Failed {
                cause,
                missing_credential,
            } => Self {
                failure: Some(FailureView {
                    cause: cause.clone(),
                    missing_credential: *missing_credential,
                    retry_href: dashboard_href(ui),
                }),
                cards: Vec::new(),
            },
            PanelState::Ready { view } => Self {
                failure: None,
                cards: state
                    .cards()
                    .into_iter()
                    .map(|summary| CardView {
                        dom_id: summary.card.dom_id(),
                        title: summary.title,
                        count: summary.count,
                        surface: surface_view(summary.card, view, ui),
                    })
                    .collect(),
            },
        }
    }
}

fn surface_view(card: CardId, view: &ViewModel, ui: &UiState) -> Option<SurfaceView> {
    if view.item_count(card) == 0 {
        return None;
    }
    let DetailSurface {
        header,
        items,
        toggle,
        ..
    } = ui.surface(card, view);

    let toggle = toggle.map(|control| {
        let mut next = ui.clone();
        next.toggle_expanded(card);
        ToggleLink {
            label: control.label,
            href: dashboard_href(&next),
        }
    });

    Some(SurfaceView {
        header,
        open: ui.is_open(card),
        items,
        toggle,
    })
}

/// The summary panel on its own.
#[derive(Template)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    pub panel: PanelView,
}

/// Shell page with the summary panel in the content slot.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub panel: PanelView,
}

impl DashboardPage {
    pub fn new(panel: PanelView) -> Self {
        Self {
            title: Screen::Dashboard.label(),
            nav: nav_links(Screen::Dashboard),
            panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::{Metric, ProjectRecord};

    fn projects(n: usize) -> ViewModel {
        ViewModel {
            projects: Metric {
                total_count: n as i64,
                items: (0..n)
                    .map(|i| ProjectRecord {
                        project_name: format!("Proj<{i}>"),
                    })
                    .collect(),
            },
            ..ViewModel::empty()
        }
    }

    fn render_panel(state: &PanelState, ui: &UiState) -> String {
        PanelTemplate {
            panel: PanelView::new(state, ui),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn ready_panel_renders_six_cards() {
        let html = render_panel(
            &PanelState::Ready {
                view: projects(2),
            },
            &UiState::new(),
        );
        for card in CardId::ALL {
            assert!(html.contains(&format!("id=\"{}\"", card.dom_id())));
        }
        assert!(html.contains("<strong>Proj&lt;0&gt;</strong>"));
        assert!(!html.contains("Show More"));
    }

    #[test]
    fn long_list_links_to_expanded_state() {
        let mut ui = UiState::new();
        ui.active = Some(CardId::TotalProjects);
        let html = render_panel(&PanelState::Ready { view: projects(5) }, &ui);
        assert!(html.contains(
            "href=\"/?open=totalProjectsCard&amp;expanded=totalProjectsCard\">Show More</a>"
        ));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<div class=\"popover\" role=\"dialog\">"));
    }

    #[test]
    fn closed_surfaces_are_hidden() {
        let html = render_panel(&PanelState::Ready { view: projects(2) }, &UiState::new());
        assert!(html.contains("<div class=\"popover\" role=\"dialog\" hidden>"));
        assert_eq!(html.matches("class=\"popover\"").count(), 1);
    }

    #[test]
    fn failed_panel_offers_retry() {
        let html = render_panel(
            &PanelState::Failed {
                cause: "GetTotalProjectsCount responded with status 500".to_string(),
                missing_credential: false,
            },
            &UiState::new(),
        );
        assert!(html.contains("Retry"));
        assert!(html.contains("status 500"));
        assert!(!html.contains("card-title"));
        assert!(!html.contains("Sign in again"));
    }

    #[test]
    fn dashboard_page_wraps_panel_in_shell() {
        let panel = PanelView::new(&PanelState::Ready { view: projects(1) }, &UiState::new());
        let html = DashboardPage::new(panel).render().unwrap();
        assert!(html.contains("app-header"));
        assert!(html.contains("id=\"totalProjectsCard\""));
        assert!(!html.contains("active-link"));
    }

    #[test]
    fn href_without_state_is_root() {
        assert_eq!(dashboard_href(&UiState::new()), "/");
    }
}
