pub mod analysis_status;
pub mod graph_kind;
pub mod llm_provider;
pub mod sort_order;
