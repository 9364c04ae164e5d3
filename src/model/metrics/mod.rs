pub mod metrics_table;
pub mod metrics_value;
