// Domain layer - Dataset and chart description models
pub mod chart;
pub mod dataset;
