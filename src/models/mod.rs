pub mod card;
pub mod screen;
pub mod stats;
