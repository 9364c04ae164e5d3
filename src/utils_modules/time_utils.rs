use crate::common::*;

/* 웨어하우스가 DATE 컬럼을 문자열로 돌려줄 때 허용하는 형식들 */
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

#[doc = r#"
    DATE 컬럼의 문자열 값을 datetime 으로 강제 변환해주는 함수.

    # Arguments
    * `raw` - 웨어하우스에서 내려온 날짜 문자열

    # Returns
    * `Result<NaiveDateTime, anyhow::Error>` - 허용된 형식 중 어느 것으로도 파싱되지 않으면 오류
"#]
pub fn parse_metrics_datetime(raw: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed: &str = raw.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(datetime) = parsed.and_hms_opt(0, 0, 0) {
                return Ok(datetime);
            }
        }
    }

    Err(anyhow!(
        "[time_utils->parse_metrics_datetime] '{}' could not be parsed as datetime",
        raw
    ))
}

#[doc = "차트 X축 라벨용 날짜 포멧 (ex. Jan 05, 2024)"]
pub fn format_chart_label(datetime: &NaiveDateTime) -> String {
    datetime.format("%b %d, %Y").to_string()
}
