// Application layer - Dashboard components and the seams they consume
pub mod chart_renderer;
pub mod dashboard_controller;
pub mod dataset_source;
pub mod demographics_panel;
pub mod selection_registry;
pub mod view;
