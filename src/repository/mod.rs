pub mod llm_repository_impl;
pub mod warehouse_repository_impl;
