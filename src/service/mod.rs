pub mod chart_service_impl;
pub mod graph_spec_service_impl;
pub mod insight_service_impl;
pub mod query_service_impl;
