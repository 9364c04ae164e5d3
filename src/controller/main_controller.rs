use crate::common::*;

use crate::dto::analysis_result::*;

use crate::enums::{analysis_status::*, sort_order::*};

use crate::env_configuration::env_config::*;

use crate::model::{chart::chart_spec::*, metrics::metrics_table::*};

use crate::traits::service_traits::{
    chart_service::*, graph_spec_service::*, insight_service::*, query_service::*,
};

#[derive(Debug, new)]
pub struct MainController<Q: QueryService, G: GraphSpecService, C: ChartService, I: InsightService>
{
    query_service: Q,
    graph_spec_service: G,
    chart_service: C,
    insight_service: I,
}

impl<Q: QueryService, G: GraphSpecService, C: ChartService, I: InsightService>
    MainController<Q, G, C, I>
{
    #[doc = r#"
        하드코딩된 분석 시나리오 1회를 실행하는 진입 함수.

        전체 파이프라인을 수행한 뒤, 성공이면 분석 내러티브를 표준출력으로 인쇄하고
        실패면 오류 메시지를 인쇄한다.

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(())
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let result: AnalysisResult = self.get_ai_analysis_with_graph().await;

        match result.status() {
            AnalysisStatus::Success => {
                println!("{}", result.analysis().as_deref().unwrap_or_default());
            }
            AnalysisStatus::Failed => {
                let error_message: &str = result.error().as_deref().unwrap_or("unknown error");
                error!("[MainController->main_task] {}", error_message);
                println!("{}", error_message);
            }
        }

        Ok(())
    }

    #[doc = r#"
        전체 파이프라인: 조회 -> spec -> 차트 -> 내러티브.

        모든 단계의 실패는 `AnalysisResult::failed` 레코드 하나로 평탄화된다.
    "#]
    pub async fn get_ai_analysis_with_graph(&self) -> AnalysisResult {
        match self.run_analysis_pipeline().await {
            Ok(result) => result,
            Err(e) => {
                error!("[MainController->get_ai_analysis_with_graph] {:?}", e);
                AnalysisResult::failed(format!("Analysis unavailable - {}", e))
            }
        }
    }

    async fn run_analysis_pipeline(&self) -> anyhow::Result<AnalysisResult> {
        let (table, graph_specs, chart_path) = self.get_valuation_summary_with_llm_graph().await?;

        let summary: Value = table.records_json()?;

        let (analysis, final_chart_path) = self
            .insight_service
            .get_ai_analysis(&summary, &graph_specs, &chart_path)
            .await?;

        Ok(AnalysisResult::success(
            analysis,
            final_chart_path,
            summary,
            graph_specs,
        ))
    }

    #[doc = r#"
        조회 + spec + 차트 단계를 수행하는 함수.

        1. `Valuation_Measures` 를 DATE 오름차순 10건 조회
        2. LLM 에 차트 spec 을 요청. 빈 spec 이면 고정 기본 spec 으로 대체
        3. 고정 경로에 차트 렌더링

        # Returns
        * `(MetricsTable, ChartSpec, PathBuf)` - 조회 결과, 사용된 spec, 차트 경로
    "#]
    async fn get_valuation_summary_with_llm_graph(
        &self,
    ) -> anyhow::Result<(MetricsTable, ChartSpec, PathBuf)> {
        let table: MetricsTable = self
            .query_service
            .get_valuation_measures(SortOrder::Asc, 10)
            .await?;

        let mut graph_specs: ChartSpec = self.graph_spec_service.get_graph_specs(&table).await;

        if graph_specs.is_empty() {
            info!("LLM failed to generate graph specifications. Using default graph settings.");
            graph_specs = ChartSpec::fallback();
        }

        let chart_path: PathBuf = self
            .chart_service
            .generate_metrics_chart(&table, &graph_specs, Path::new(CHART_OUTPUT_PATH.as_str()))
            .await
            .map_err(|e| {
                anyhow!(
                    "[MainController->get_valuation_summary_with_llm_graph] Failed to create graph from LLM specifications: {:?}",
                    e
                )
            })?;

        Ok((table, graph_specs, chart_path))
    }

    #[doc = r#"
        최신 지표 5건의 요약과 날짜별 bar 차트를 반환하는 경로 (LLM 미사용).

        # Returns
        * `AnalysisResult` - summary 와 chart_path 가 채워진 success, 또는 failed
    "#]
    pub async fn get_valuation_summary(&self) -> AnalysisResult {
        let table: MetricsTable = match self
            .query_service
            .get_valuation_measures(SortOrder::Desc, 5)
            .await
        {
            Ok(table) => table,
            Err(e) => {
                error!("[MainController->get_valuation_summary] {:?}", e);
                return AnalysisResult::failed(e.to_string());
            }
        };

        let chart_path: PathBuf = match self
            .chart_service
            .generate_summary_chart(&table, Path::new(SUMMARY_CHART_OUTPUT_PATH.as_str()))
            .await
        {
            Ok(path) => path,
            Err(e) => {
                error!("[MainController->get_valuation_summary] {:?}", e);
                return AnalysisResult::failed(e.to_string());
            }
        };

        match table.records_json() {
            Ok(summary) => AnalysisResult::summary_with_chart(summary, chart_path),
            Err(e) => {
                error!("[MainController->get_valuation_summary] {:?}", e);
                AnalysisResult::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::metrics::metrics_value::*;
    use crate::service::{
        chart_service_impl::*, graph_spec_service_impl::*, insight_service_impl::*,
        query_service_impl::*,
    };
    use crate::traits::repository_traits::{llm_repository::*, warehouse_repository::*};

    struct StubWarehouseRepository {
        table: MetricsTable,
    }

    #[async_trait]
    impl WarehouseRepository for StubWarehouseRepository {
        async fn fetch_table(&self, _sql: &str) -> Result<MetricsTable, anyhow::Error> {
            Ok(self.table.clone())
        }
    }

    /* spec 요청과 분석 요청을 프롬프트 내용으로 구분하는 stub */
    struct StubLlmRepository;

    #[async_trait]
    impl LlmRepository for StubLlmRepository {
        async fn invoke(&self, prompt: &str) -> Result<String, anyhow::Error> {
            if prompt.contains("Generate a graph specification") {
                Ok("Title: Valuation Trend\nType: line\nX-axis: Date\nY-axis: Ratio".to_string())
            } else {
                Ok("PE ratio rose sharply across the period.".to_string())
            }
        }
    }

    fn sample_table() -> MetricsTable {
        MetricsTable::new(
            vec![
                "DATE".to_string(),
                "PE_RATIO".to_string(),
                "PS_RATIO".to_string(),
            ],
            vec![
                vec![
                    MetricsValue::Text("2024-01-01".to_string()),
                    MetricsValue::Number(40.0),
                    MetricsValue::Number(12.0),
                ],
                vec![
                    MetricsValue::Text("2024-02-01".to_string()),
                    MetricsValue::Number(55.0),
                    MetricsValue::Number(14.0),
                ],
                vec![
                    MetricsValue::Text("2024-03-01".to_string()),
                    MetricsValue::Number(62.0),
                    MetricsValue::Number(13.0),
                ],
            ],
        )
    }

    fn controller_with(
        table: MetricsTable,
    ) -> MainController<
        QueryServiceImpl<StubWarehouseRepository>,
        GraphSpecServiceImpl<StubLlmRepository>,
        ChartServiceImpl,
        InsightServiceImpl<StubLlmRepository>,
    > {
        let llm_repo: Arc<StubLlmRepository> = Arc::new(StubLlmRepository);

        MainController::new(
            QueryServiceImpl::new(StubWarehouseRepository { table }, "dbo".to_string()),
            GraphSpecServiceImpl::new(Arc::clone(&llm_repo)),
            ChartServiceImpl::new(),
            InsightServiceImpl::new(llm_repo),
        )
    }

    #[tokio::test]
    async fn line_spec_scenario_produces_chart_and_analysis() {
        let result: AnalysisResult = controller_with(sample_table())
            .get_ai_analysis_with_graph()
            .await;

        assert_eq!(*result.status(), AnalysisStatus::Success);
        assert!(!result.analysis().as_deref().unwrap().is_empty());

        let chart_path: &PathBuf = result.chart_path().as_ref().unwrap();
        assert!(chart_path.exists());

        let summary: &Value = result.summary().as_ref().unwrap();
        assert_eq!(summary.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn missing_date_column_short_circuits_with_failed_status() {
        let table: MetricsTable = MetricsTable::new(
            vec!["PE_RATIO".to_string(), "PS_RATIO".to_string()],
            vec![vec![MetricsValue::Number(40.0), MetricsValue::Number(12.0)]],
        );

        let result: AnalysisResult = controller_with(table).get_ai_analysis_with_graph().await;

        assert_eq!(*result.status(), AnalysisStatus::Failed);
        assert!(result.error().as_deref().unwrap().contains("DATE"));
        assert!(result.analysis().is_none());
    }

    #[tokio::test]
    async fn summary_path_returns_records_with_a_bar_chart() {
        let result: AnalysisResult = controller_with(sample_table()).get_valuation_summary().await;

        assert_eq!(*result.status(), AnalysisStatus::Success);
        assert!(result.summary().is_some());
        assert!(result.analysis().is_none());

        /* 요약 경로도 고정 경로에 bar 차트를 남긴다 */
        let chart_path: &PathBuf = result.chart_path().as_ref().unwrap();
        assert!(chart_path.exists());
        assert!(std::fs::metadata(chart_path).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn summary_path_fails_when_the_date_column_is_missing() {
        let table: MetricsTable = MetricsTable::new(
            vec!["PE_RATIO".to_string()],
            vec![vec![MetricsValue::Number(40.0)]],
        );

        let result: AnalysisResult = controller_with(table).get_valuation_summary().await;

        assert_eq!(*result.status(), AnalysisStatus::Failed);
        assert!(result.error().as_deref().unwrap().contains("DATE"));
    }
}
