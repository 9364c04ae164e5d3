use crate::common::*;

use crate::model::metrics::metrics_table::*;

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn fetch_table(&self, sql: &str) -> Result<MetricsTable, anyhow::Error>;
}
