// Domain layer - Pure data types and formatting
pub mod chart_spec;
pub mod dashboard;
pub mod descriptor;
pub mod envelope;
pub mod format;
pub mod metric_series;
