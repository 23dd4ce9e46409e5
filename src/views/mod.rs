//! Server-rendered HTML for the shell and the summary panel.
//!
//! Markup lives in askama templates under `templates/`; these modules build
//! the view data the templates read.

pub mod layout;
pub mod panel;

use askama::Template;

use crate::errors::AppError;

/// Render a template, reporting failures as internal errors.
pub fn render<T: Template>(template: &T) -> Result<String, AppError> {
    template
        .render()
        .map_err(|e| AppError::Internal(format!("Template rendering failed: {e}")))
}
