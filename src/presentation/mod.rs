// Presentation layer - HTTP surface for the transform service
pub mod app_state;
pub mod handlers;
