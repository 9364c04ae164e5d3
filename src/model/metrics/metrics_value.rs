use crate::common::*;

#[doc = r#"
    웨어하우스 셀 하나를 표현하는 값 타입.

    # Variants
    * `Number` - 수치 컬럼 (정수/실수/decimal 모두 f64 로 수렴)
    * `Text` - 수치로도 날짜로도 해석되지 않는 문자열
    * `Date` - DATE 계열 컬럼
    * `Null` - SQL NULL
"#]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricsValue {
    Number(f64),
    Text(String),
    Date(NaiveDateTime),
    Null,
}

impl MetricsValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricsValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, MetricsValue::Number(_))
    }
}
