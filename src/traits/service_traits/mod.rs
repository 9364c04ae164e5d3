pub mod chart_service;
pub mod graph_spec_service;
pub mod insight_service;
pub mod query_service;
