use crate::common::*;

use crate::model::chart::chart_spec::*;

#[async_trait]
pub trait InsightService: Send + Sync {
    #[doc = r#"
        데이터 요약과 차트 spec 을 바탕으로 LLM 분석 내러티브를 받아오는 함수.
        # Returns
        * `(String, PathBuf)` - 분석 텍스트와 검증된 차트 파일 경로
    "#]
    async fn get_ai_analysis(
        &self,
        summary: &Value,
        graph_specs: &ChartSpec,
        chart_path: &Path,
    ) -> anyhow::Result<(String, PathBuf)>;
}
