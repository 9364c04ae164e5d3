pub mod warehouse_config;
