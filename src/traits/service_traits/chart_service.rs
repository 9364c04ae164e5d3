use crate::common::*;

use crate::model::{chart::chart_spec::*, metrics::metrics_table::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        MetricsTable 을 정규화해서 spec 에 따라 stacked-area 또는 line 차트로 렌더링
        # Arguments
        * `table` - DATE 컬럼을 포함한 조회 결과
        * `spec` - LLM 이 제안한 차트 spec (permissive)
        * `output_path` - 차트 이미지가 저장될 경로
    "]
    async fn generate_metrics_chart(
        &self,
        table: &MetricsTable,
        spec: &ChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<PathBuf>;

    #[doc = "
        최신 지표 테이블을 날짜별 grouped bar 차트로 렌더링 (원본 값, 정규화 없음)
        # Arguments
        * `table` - DATE 컬럼을 포함한 조회 결과
        * `output_path` - 차트 이미지가 저장될 경로
    "]
    async fn generate_summary_chart(
        &self,
        table: &MetricsTable,
        output_path: &Path,
    ) -> anyhow::Result<PathBuf>;
}
