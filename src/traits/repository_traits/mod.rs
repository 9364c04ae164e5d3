pub mod llm_repository;
pub mod warehouse_repository;
