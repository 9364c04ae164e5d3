use crate::common::*;

use crate::enums::analysis_status::*;
use crate::model::chart::chart_spec::*;

#[doc = r#"
    파이프라인 1회 실행의 최종 결과 레코드.

    모든 단계의 실패는 이 레코드의 `Failed` + 오류 문자열로 평탄화된다.
    반환값과 side-effect 인 PNG 파일 외에는 어디에도 저장되지 않는다.

    # Fields
    * `status` - success / failed
    * `analysis` - LLM 이 생성한 분석 내러티브
    * `chart_path` - 생성된 차트 파일 경로
    * `summary` - row 단위 데이터 요약
    * `graph_specs` - 차트 렌더링에 사용된 spec
    * `error` - 실패 시 오류 메시지
"#]
#[derive(Debug, Clone, Serialize, Getters)]
#[getset(get = "pub")]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_specs: Option<ChartSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn success(
        analysis: String,
        chart_path: PathBuf,
        summary: Value,
        graph_specs: ChartSpec,
    ) -> Self {
        AnalysisResult {
            status: AnalysisStatus::Success,
            analysis: Some(analysis),
            chart_path: Some(chart_path),
            summary: Some(summary),
            graph_specs: Some(graph_specs),
            error: None,
        }
    }

    pub fn summary_with_chart(summary: Value, chart_path: PathBuf) -> Self {
        AnalysisResult {
            status: AnalysisStatus::Success,
            analysis: None,
            chart_path: Some(chart_path),
            summary: Some(summary),
            graph_specs: None,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        AnalysisResult {
            status: AnalysisStatus::Failed,
            analysis: None,
            chart_path: None,
            summary: None,
            graph_specs: None,
            error: Some(error.into()),
        }
    }
}
