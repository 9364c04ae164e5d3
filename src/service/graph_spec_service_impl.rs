use crate::common::*;

use crate::model::{chart::chart_spec::*, metrics::metrics_table::*};

use crate::traits::{repository_traits::llm_repository::*, service_traits::graph_spec_service::*};

#[derive(Debug, new)]
pub struct GraphSpecServiceImpl<L: LlmRepository> {
    llm_repo: Arc<L>,
}

impl<L: LlmRepository> GraphSpecServiceImpl<L> {
    #[doc = r#"
        데이터 dump 를 프롬프트에 내장해서 LLM 에 차트 spec 을 요청하는 함수.

        응답은 `key: value` 라인으로 엄격하게 파싱되며, 파싱 실패는 호출자인
        `get_graph_specs` 에서 빈 spec 으로 흡수된다.
    "#]
    async fn request_graph_specs(&self, table: &MetricsTable) -> anyhow::Result<ChartSpec> {
        let data_summary: Value = table.column_oriented_json()?;

        let prompt: String = format!(
            r#"Based on the following NVIDIA financial data:
{data_summary}
Generate a graph specification in this format:
- Title: [Graph title]
- Type: [line/bar/scatter]
- X-axis: [label and settings]
- Y-axis: [label and settings]
- Colors: [color scheme]
- Additional elements: [grid, legend position, etc.]

Focus on making the graph visually informative and easy to interpret."#
        );

        let response_text: String = self.llm_repo.invoke(&prompt).await?;

        ChartSpec::from_response(&response_text)
    }
}

#[async_trait]
impl<L: LlmRepository> GraphSpecService for GraphSpecServiceImpl<L> {
    #[doc = r#"
        차트 spec 을 받아오되, 어떤 실패도 오류로 전파하지 않는 함수.

        HTTP 오류 / 빈 응답 / 파싱 실패는 전부 로깅 후 빈 spec 으로 내려간다.
        fail-silent 는 이 계층의 명시적 정책이며, 기본값 적용은 호출자 몫이다.
    "#]
    async fn get_graph_specs(&self, table: &MetricsTable) -> ChartSpec {
        match self.request_graph_specs(table).await {
            Ok(spec) => spec,
            Err(e) => {
                error!(
                    "[GraphSpecServiceImpl->get_graph_specs] Failed to get graph specs from the LLM: {:?}",
                    e
                );
                ChartSpec::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::metrics::metrics_value::*;

    struct StubLlmRepository {
        response: Result<String, String>,
    }

    #[async_trait]
    impl LlmRepository for StubLlmRepository {
        async fn invoke(&self, _prompt: &str) -> Result<String, anyhow::Error> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(anyhow!("{}", message.clone())),
            }
        }
    }

    fn sample_table() -> MetricsTable {
        MetricsTable::new(
            vec!["DATE".to_string(), "PE_RATIO".to_string()],
            vec![vec![
                MetricsValue::Text("2024-01-01".to_string()),
                MetricsValue::Number(10.0),
            ]],
        )
    }

    #[tokio::test]
    async fn valid_response_yields_a_parsed_spec() {
        let service = GraphSpecServiceImpl::new(Arc::new(StubLlmRepository {
            response: Ok("Title: Trend\nType: line".to_string()),
        }));

        let spec: ChartSpec = service.get_graph_specs(&sample_table()).await;

        assert_eq!(spec.get("Title"), Some("Trend"));
        assert_eq!(spec.chart_type(), "line");
    }

    #[tokio::test]
    async fn llm_failure_yields_an_empty_spec() {
        let service = GraphSpecServiceImpl::new(Arc::new(StubLlmRepository {
            response: Err("connection refused".to_string()),
        }));

        assert!(service.get_graph_specs(&sample_table()).await.is_empty());
    }

    #[tokio::test]
    async fn unparseable_response_yields_an_empty_spec() {
        let service = GraphSpecServiceImpl::new(Arc::new(StubLlmRepository {
            response: Ok("sorry, I cannot help with that".to_string()),
        }));

        assert!(service.get_graph_specs(&sample_table()).await.is_empty());
    }
}
