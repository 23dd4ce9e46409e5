//! Route definitions for the staffdash server.

pub mod api;
pub mod dashboard;
pub mod health;
pub mod shell;
pub mod ui;
