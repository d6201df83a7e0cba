// Application layer - Chart catalog, builder and load orchestration
pub mod bootstrap;
pub mod catalog;
pub mod chart_builder;
pub mod chart_sink;
pub mod metrics_source;
pub mod orchestrator;

#[cfg(test)]
pub mod testing;
