use crate::common::*;

use crate::enums::sort_order::*;
use crate::model::metrics::metrics_table::*;

#[async_trait]
pub trait QueryService: Send + Sync {
    #[doc = r#"
        `Valuation_Measures` 테이블을 조회해서 정규화된 MetricsTable 로 반환
        # Arguments
        * `order` - DATE 정렬 방향
        * `limit` - 조회할 row 수
    "#]
    async fn get_valuation_measures(
        &self,
        order: SortOrder,
        limit: usize,
    ) -> anyhow::Result<MetricsTable>;
}
