use crate::common::*;

/* spec 값이 비어있을 때 사용하는 기본 라벨들 */
pub const DEFAULT_TITLE: &str = "NVIDIA Financial Metrics";
pub const DEFAULT_TYPE: &str = "stacked";
pub const DEFAULT_X_AXIS: &str = "Date";
pub const DEFAULT_Y_AXIS: &str = "Normalized Value (0-1 scale)";

#[doc = r#"
    LLM 이 제안한 차트 표현 힌트 모음.

    값은 전부 자유 텍스트이며 참고용이다. 키가 없을 때는 accessor 가
    리터럴 기본값을 돌려주므로, 소비자는 항상 permissive 하게 접근한다.

    파싱은 `from_response` 에서 엄격하게 실패할 수 있고, 그 실패를 빈 spec 으로
    흡수할지는 service 계층의 정책이다.
"#]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSpec {
    pub specs: HashMap<String, String>,
}

impl ChartSpec {
    pub fn empty() -> Self {
        ChartSpec::default()
    }

    #[doc = r#"
        LLM 응답 본문을 `key: value` 라인 단위로 파싱해주는 함수.

        1. 응답을 개행으로 분리
        2. 콜론을 포함한 라인마다 첫 번째 콜론을 기준으로 key / value 를 분리
        3. key, value 양쪽 모두 trim
        4. 콜론이 없는 라인은 무시

        # Returns
        * `Result<ChartSpec, anyhow::Error>` - 유효한 `key: value` 라인이 하나도 없으면 오류
    "#]
    pub fn from_response(response_text: &str) -> anyhow::Result<Self> {
        let mut specs: HashMap<String, String> = HashMap::new();

        for line in response_text.split('\n') {
            if let Some((key, value)) = line.split_once(':') {
                specs.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        if specs.is_empty() {
            return Err(anyhow!(
                "[ChartSpec->from_response] No 'key: value' line found in the LLM response"
            ));
        }

        Ok(ChartSpec { specs })
    }

    #[doc = "LLM 이 spec 생성에 실패했을 때 사용하는 고정 기본 spec"]
    pub fn fallback() -> Self {
        let specs: HashMap<String, String> = HashMap::from([
            ("Title".to_string(), "Default Graph".to_string()),
            ("Type".to_string(), "line".to_string()),
            ("X-axis".to_string(), "Date".to_string()),
            ("Y-axis".to_string(), "Value".to_string()),
            (
                "Additional elements".to_string(),
                "grid, legend".to_string(),
            ),
        ]);

        ChartSpec { specs }
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.specs.get(key).map(String::as_str)
    }

    pub fn title(&self) -> &str {
        self.get("Title").unwrap_or(DEFAULT_TITLE)
    }

    pub fn chart_type(&self) -> &str {
        self.get("Type").unwrap_or(DEFAULT_TYPE)
    }

    pub fn x_axis(&self) -> &str {
        self.get("X-axis").unwrap_or(DEFAULT_X_AXIS)
    }

    pub fn y_axis(&self) -> &str {
        self.get("Y-axis").unwrap_or(DEFAULT_Y_AXIS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_extracts_every_line_with_a_colon() {
        let response = "Title: NVIDIA Valuation Trend\nType: line\nnote without colon\nColors: blue, green";
        let spec: ChartSpec = ChartSpec::from_response(response).unwrap();

        assert_eq!(spec.get("Title"), Some("NVIDIA Valuation Trend"));
        assert_eq!(spec.get("Type"), Some("line"));
        assert_eq!(spec.get("Colors"), Some("blue, green"));
        assert_eq!(spec.specs.len(), 3);
    }

    #[test]
    fn from_response_splits_on_first_colon_only() {
        let spec: ChartSpec =
            ChartSpec::from_response("X-axis: label: rotated 45 degrees").unwrap();

        assert_eq!(spec.get("X-axis"), Some("label: rotated 45 degrees"));
    }

    #[test]
    fn from_response_trims_keys_and_values() {
        let spec: ChartSpec = ChartSpec::from_response("  Title  :   Spaced Out  ").unwrap();

        assert_eq!(spec.get("Title"), Some("Spaced Out"));
    }

    #[test]
    fn from_response_fails_without_any_pair() {
        assert!(ChartSpec::from_response("no pairs here\njust prose").is_err());
        assert!(ChartSpec::from_response("").is_err());
    }

    #[test]
    fn accessors_fall_back_to_literal_defaults() {
        let spec: ChartSpec = ChartSpec::empty();

        assert_eq!(spec.title(), DEFAULT_TITLE);
        assert_eq!(spec.chart_type(), DEFAULT_TYPE);
        assert_eq!(spec.x_axis(), DEFAULT_X_AXIS);
        assert_eq!(spec.y_axis(), DEFAULT_Y_AXIS);
    }

    #[test]
    fn fallback_carries_the_hardcoded_default_settings() {
        let spec: ChartSpec = ChartSpec::fallback();

        assert_eq!(spec.get("Title"), Some("Default Graph"));
        assert_eq!(spec.chart_type(), "line");
    }
}
