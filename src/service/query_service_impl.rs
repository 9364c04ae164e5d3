use crate::common::*;

use crate::enums::sort_order::*;

use crate::model::metrics::metrics_table::*;

use crate::traits::{repository_traits::warehouse_repository::*, service_traits::query_service::*};

pub const VALUATION_MEASURES_TABLE: &str = "Valuation_Measures";

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: WarehouseRepository> {
    warehouse_repo: R,
    schema: String,
}

#[async_trait]
impl<R: WarehouseRepository> QueryService for QueryServiceImpl<R> {
    #[doc = r#"
        `Valuation_Measures` 를 조회해서 검증된 MetricsTable 로 반환해주는 함수.

        1. DATE 정렬 방향과 row 수가 박힌 고정 SELECT 를 실행
        2. 컬럼명을 대문자 + trim 으로 정규화
        3. 결과가 비어있으면 오류 반환
        4. DATE 컬럼의 존재와 datetime 변환 가능 여부를 검증

        # Arguments
        * `order` - DATE 정렬 방향 (summary 경로는 DESC/5, 차트 경로는 ASC/10)
        * `limit` - 조회할 row 수

        # Returns
        * `Result<MetricsTable, anyhow::Error>` - 빈 결과 / DATE 누락 / 파싱 불가 시 오류
    "#]
    async fn get_valuation_measures(
        &self,
        order: SortOrder,
        limit: usize,
    ) -> anyhow::Result<MetricsTable> {
        let sql: String = format!(
            "SELECT TOP {} * FROM {}.{} ORDER BY DATE {}",
            limit,
            self.schema,
            VALUATION_MEASURES_TABLE,
            order.as_sql()
        );

        let mut table: MetricsTable = self.warehouse_repo.fetch_table(&sql).await?;

        table.normalize_column_names();

        if table.is_empty() {
            return Err(anyhow!(
                "[QueryServiceImpl->get_valuation_measures] No data returned from the warehouse. Ensure the '{}' table contains data",
                VALUATION_MEASURES_TABLE
            ));
        }

        /* DATE 존재 + datetime 변환 가능 여부 검증. 실패는 그대로 전파 */
        table.date_column_values()?;

        Ok(table)
    }
}
