use crate::model::chart::chart_spec::*;

#[doc = r#"
    렌더링할 그래프 종류.

    spec 의 `Type` 값이 대소문자 무시하고 "stacked" 일 때만 stacked-area,
    그 외 (값이 없을 때 포함) 는 전부 line 으로 내려간다.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Stacked,
    Line,
}

impl GraphKind {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        if spec.chart_type().eq_ignore_ascii_case("stacked") {
            GraphKind::Stacked
        } else {
            GraphKind::Line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with_type(chart_type: &str) -> ChartSpec {
        ChartSpec::from_response(&format!("Type: {}", chart_type)).unwrap()
    }

    #[test]
    fn stacked_is_selected_case_insensitively() {
        assert_eq!(GraphKind::from_spec(&spec_with_type("stacked")), GraphKind::Stacked);
        assert_eq!(GraphKind::from_spec(&spec_with_type("STACKED")), GraphKind::Stacked);
        assert_eq!(GraphKind::from_spec(&spec_with_type("Stacked")), GraphKind::Stacked);
    }

    #[test]
    fn any_other_type_falls_back_to_line() {
        assert_eq!(GraphKind::from_spec(&spec_with_type("line")), GraphKind::Line);
        assert_eq!(GraphKind::from_spec(&spec_with_type("bar")), GraphKind::Line);
        assert_eq!(GraphKind::from_spec(&spec_with_type("scatter")), GraphKind::Line);
    }

    #[test]
    fn absent_type_uses_the_stacked_default() {
        /* Type 키 자체가 없으면 chart_type() 기본값 "stacked" 가 적용된다 */
        let spec: ChartSpec = ChartSpec::from_response("Title: something").unwrap();
        assert_eq!(GraphKind::from_spec(&spec), GraphKind::Stacked);
    }
}
