// Presentation layer - HTTP surface over the dashboard
pub mod app_state;
pub mod handlers;
pub mod router;
