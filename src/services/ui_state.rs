//! Per-card view state: which detail surface is open and which lists are expanded.
//!
//! Only one surface is open at a time. Hovering a card replaces the active
//! card outright (last hover wins) and leaving a card closes whatever is open.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::card::CardId;
use crate::models::stats::{DetailItem, ViewModel};

/// Items shown by a collapsed detail surface.
pub const COLLAPSED_ITEMS: usize = 3;

/// Source of per-card item counts.
pub trait ItemCounts {
    /// `None` when the count is not known.
    fn item_count(&self, card: CardId) -> Option<usize>;
}

impl ItemCounts for ViewModel {
    fn item_count(&self, card: CardId) -> Option<usize> {
        Some(ViewModel::item_count(self, card))
    }
}

impl ItemCounts for BTreeMap<CardId, usize> {
    fn item_count(&self, card: CardId) -> Option<usize> {
        self.get(&card).copied()
    }
}

/// A pointer or click interaction on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "card", rename_all = "snake_case")]
pub enum UiEvent {
    PointerEnter(CardId),
    PointerLeave(CardId),
    ToggleExpanded(CardId),
}

/// Serializable UI state of the summary panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub expanded: BTreeMap<CardId, bool>,
    #[serde(default)]
    pub active: Option<CardId>,
}

/// "Show More" / "Show Less" control of an expandable surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub label: &'static str,
}

/// What a card's detail surface lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSurface {
    pub card: CardId,
    pub header: &'static str,
    pub items: Vec<DetailItem>,
    pub total_items: usize,
    pub expanded: bool,
    pub toggle: Option<ToggleControl>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, card: CardId) -> bool {
        self.expanded.get(&card).copied().unwrap_or(false)
    }

    pub fn is_open(&self, card: CardId) -> bool {
        self.active == Some(card)
    }

    /// Open `card`'s surface, closing any other. A card with no items opens
    /// nothing but still closes the previous surface.
    pub fn pointer_enter<C: ItemCounts + ?Sized>(&mut self, card: CardId, counts: &C) {
        self.active = match counts.item_count(card) {
            Some(0) => None,
            _ => Some(card),
        };
    }

    /// Close whichever surface is open.
    pub fn pointer_leave(&mut self, _card: CardId) {
        self.active = None;
    }

    /// Flip the card's expanded flag and keep its surface as the active one.
    pub fn toggle_expanded(&mut self, card: CardId) {
        let flag = self.expanded.entry(card).or_insert(false);
        *flag = !*flag;
        self.active = Some(card);
    }

    pub fn apply<C: ItemCounts + ?Sized>(&mut self, event: UiEvent, counts: &C) {
        match event {
            UiEvent::PointerEnter(card) => self.pointer_enter(card, counts),
            UiEvent::PointerLeave(card) => self.pointer_leave(card),
            UiEvent::ToggleExpanded(card) => self.toggle_expanded(card),
        }
        tracing::trace!(?event, active = ?self.active, "UI state transition");
    }

    /// The card's surface contents, whether or not it is open.
    pub fn surface(&self, card: CardId, view: &ViewModel) -> DetailSurface {
        let expanded = self.is_expanded(card);
        let total_items = view.item_count(card);
        let limit = if expanded { None } else { Some(COLLAPSED_ITEMS) };
        let toggle = (total_items > COLLAPSED_ITEMS).then_some(ToggleControl {
            label: if expanded { "Show Less" } else { "Show More" },
        });

        DetailSurface {
            card,
            header: card.detail_header(),
            items: view.detail_items(card, limit),
            total_items,
            expanded,
            toggle,
        }
    }

    /// The card's surface if it is the open one.
    pub fn detail_surface(&self, card: CardId, view: &ViewModel) -> Option<DetailSurface> {
        self.is_open(card).then(|| self.surface(card, view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::{EmployeeRecord, Metric, ProjectRecord};

    fn view_with(employees: usize, projects: usize) -> ViewModel {
        ViewModel {
            total_employees: Metric {
                total_count: employees as i64,
                items: (0..employees)
                    .map(|i| EmployeeRecord {
                        id: i.to_string(),
                        full_name: format!("Employee {i}"),
                    })
                    .collect(),
            },
            projects: Metric {
                total_count: projects as i64,
                items: (0..projects)
                    .map(|i| ProjectRecord {
                        project_name: format!("Project {i}"),
                    })
                    .collect(),
            },
            ..ViewModel::empty()
        }
    }

    #[test]
    fn short_list_has_no_toggle() {
        let view = view_with(3, 0);
        let surface = UiState::new().surface(CardId::TotalEmployees, &view);
        assert_eq!(surface.items.len(), 3);
        assert!(surface.toggle.is_none());
    }

    #[test]
    fn toggle_switches_between_three_and_all() {
        let view = view_with(8, 0);
        let mut ui = UiState::new();
        ui.pointer_enter(CardId::TotalEmployees, &view);

        let collapsed = ui.detail_surface(CardId::TotalEmployees, &view).unwrap();
        assert_eq!(collapsed.items.len(), 3);
        assert_eq!(collapsed.toggle.unwrap().label, "Show More");

        ui.toggle_expanded(CardId::TotalEmployees);
        let expanded = ui.detail_surface(CardId::TotalEmployees, &view).unwrap();
        assert!(expanded.expanded);
        assert_eq!(expanded.items.len(), 8);
        assert_eq!(expanded.toggle.unwrap().label, "Show Less");

        ui.toggle_expanded(CardId::TotalEmployees);
        let again = ui.detail_surface(CardId::TotalEmployees, &view).unwrap();
        assert_eq!(again.items.len(), 3);
    }

    #[test]
    fn hovering_another_card_moves_the_surface() {
        let view = view_with(5, 5);
        let mut ui = UiState::new();
        ui.pointer_enter(CardId::TotalEmployees, &view);
        assert!(ui.is_open(CardId::TotalEmployees));

        ui.pointer_enter(CardId::TotalProjects, &view);
        assert!(!ui.is_open(CardId::TotalEmployees));
        assert!(ui.is_open(CardId::TotalProjects));

        let open: Vec<_> = CardId::ALL
            .into_iter()
            .filter(|c| ui.detail_surface(*c, &view).is_some())
            .collect();
        assert_eq!(open, vec![CardId::TotalProjects]);
    }

    #[test]
    fn pointer_leave_closes_surface() {
        let view = view_with(2, 0);
        let mut ui = UiState::new();
        ui.pointer_enter(CardId::TotalEmployees, &view);
        ui.pointer_leave(CardId::TotalEmployees);
        assert!(ui.active.is_none());
        assert!(ui.detail_surface(CardId::TotalEmployees, &view).is_none());
    }

    #[test]
    fn empty_list_does_not_open() {
        let view = view_with(4, 0);
        let mut ui = UiState::new();
        ui.pointer_enter(CardId::TotalEmployees, &view);
        ui.pointer_enter(CardId::TotalProjects, &view);
        assert!(ui.active.is_none());
    }

    #[test]
    fn expanded_flags_are_independent_per_card() {
        let view = view_with(6, 6);
        let mut ui = UiState::new();
        ui.toggle_expanded(CardId::TotalProjects);
        assert!(ui.is_expanded(CardId::TotalProjects));
        assert!(!ui.is_expanded(CardId::TotalEmployees));
        assert_eq!(ui.surface(CardId::TotalEmployees, &view).items.len(), 3);
        assert_eq!(ui.surface(CardId::TotalProjects, &view).items.len(), 6);
    }

    #[test]
    fn apply_with_unknown_counts_opens() {
        let mut ui = UiState::new();
        let counts: BTreeMap<CardId, usize> = BTreeMap::new();
        ui.apply(UiEvent::PointerEnter(CardId::TotalAbsent), &counts);
        assert!(ui.is_open(CardId::TotalAbsent));
        ui.apply(UiEvent::PointerLeave(CardId::TotalAbsent), &counts);
        assert!(ui.active.is_none());
    }

    #[test]
    fn state_and_events_serialize_with_card_ids() {
        let mut ui = UiState::new();
        ui.toggle_expanded(CardId::TotalDailyReports);
        let json = serde_json::to_value(&ui).unwrap();
        assert_eq!(json["active"], "totalDailyReportsCard");
        assert_eq!(json["expanded"]["totalDailyReportsCard"], true);

        let event: UiEvent = serde_json::from_str(
            r#"{"type":"pointer_enter","card":"totalPresentCard"}"#,
        )
        .unwrap();
        assert_eq!(event, UiEvent::PointerEnter(CardId::TotalPresent));

        let back: UiState = serde_json::from_value(json).unwrap();
        assert_eq!(back, ui);
    }
}
