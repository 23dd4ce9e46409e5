pub mod credentials;
pub mod panel;
pub mod stats_client;
pub mod ui_state;
