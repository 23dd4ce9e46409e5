//! Page frame: header, sidebar and the content slot.

use askama::Template;

use crate::models::screen::Screen;

/// One sidebar menu entry.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Sidebar entries with the link for `active` marked.
pub fn nav_links(active: Screen) -> Vec<NavLink> {
    Screen::NAV
        .into_iter()
        .filter_map(|screen| {
            Some(NavLink {
                path: screen.path(),
                label: screen.label(),
                icon: screen.icon()?,
                active: screen == active,
            })
        })
        .collect()
}

/// Placeholder page for a screen whose content lives outside this crate.
#[derive(Template)]
#[template(path = "screen.html")]
pub struct ScreenPage {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub screen_key: &'static str,
    pub heading: &'static str,
}

impl ScreenPage {
    pub fn new(screen: Screen) -> Self {
        Self {
            title: screen.label(),
            nav: nav_links(screen),
            screen_key: screen.key(),
            heading: screen.label(),
        }
    }
}
