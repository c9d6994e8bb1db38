// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_dataset_source;
pub mod view_state;
