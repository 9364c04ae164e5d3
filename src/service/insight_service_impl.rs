use crate::common::*;

use crate::env_configuration::env_config::*;

use crate::model::chart::chart_spec::*;

use crate::traits::{repository_traits::llm_repository::*, service_traits::insight_service::*};

#[derive(Debug, new)]
pub struct InsightServiceImpl<L: LlmRepository> {
    llm_repo: Arc<L>,
}

#[async_trait]
impl<L: LlmRepository> InsightService for InsightServiceImpl<L> {
    #[doc = r#"
        데이터 요약과 차트 spec 으로 분석 프롬프트를 구성해서 LLM 내러티브를 받아오는 함수.

        응답 텍스트는 의미 검증 없이 그대로 반환한다.
        차트 파일이 실제로 존재하는지 확인하고, 없으면 경고 후 고정 기본 경로로 대체한다.

        # Arguments
        * `summary` - row 단위 데이터 요약
        * `graph_specs` - 차트 렌더링에 사용된 spec
        * `chart_path` - 렌더러가 보고한 차트 파일 경로

        # Returns
        * `(String, PathBuf)` - 분석 텍스트와 최종 차트 경로
    "#]
    async fn get_ai_analysis(
        &self,
        summary: &Value,
        graph_specs: &ChartSpec,
        chart_path: &Path,
    ) -> anyhow::Result<(String, PathBuf)> {
        let specs_dump: String = serde_json::to_string(graph_specs)?;

        let prompt: String = format!(
            r#"Analyze the following NVIDIA financial data and the generated graph:
Data Summary:
{summary}

Graph Specifications:
{specs_dump}

Provide insights based on the data and the graph. Highlight key trends, patterns, and any significant observations."#
        );

        let analysis: String = self.llm_repo.invoke(&prompt).await?;

        let final_chart_path: PathBuf = if chart_path.exists() {
            chart_path.to_path_buf()
        } else {
            warn!(
                "[InsightServiceImpl->get_ai_analysis] Chart path not found: {:?}",
                chart_path
            );
            PathBuf::from(CHART_OUTPUT_PATH.as_str())
        };

        Ok((analysis, final_chart_path))
    }
}
