use crate::common::*;

use crate::model::metrics::metrics_value::*;
use crate::utils_modules::time_utils::*;

pub const DATE_COLUMN: &str = "DATE";

#[doc = r#"
    웨어하우스 조회 결과를 담는 테이블.

    컬럼 순서를 보존하며, row 는 컬럼 순서와 동일한 순서의 셀 벡터로 구성된다.

    # Fields
    * `columns` - 컬럼명 목록 (조회 순서 유지)
    * `rows` - row 단위 셀 목록
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct MetricsTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<MetricsValue>>,
}

impl MetricsTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[doc = "컬럼명을 대문자 + trim 으로 정규화해주는 함수"]
    pub fn normalize_column_names(&mut self) {
        for column in self.columns.iter_mut() {
            *column = column.trim().to_uppercase();
        }
    }

    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == column_name)
    }

    #[doc = r#"
        DATE 컬럼의 모든 셀을 datetime 으로 강제 변환해주는 함수.

        1. DATE 컬럼이 존재하는지 확인
        2. 각 셀을 datetime 으로 변환 (Date 셀은 그대로, 문자열 셀은 파싱)
        3. NULL 이거나 파싱 불가능한 셀이 하나라도 있으면 오류 반환

        # Returns
        * `Result<Vec<NaiveDateTime>, anyhow::Error>` - row 순서와 동일한 datetime 목록
    "#]
    pub fn date_column_values(&self) -> anyhow::Result<Vec<NaiveDateTime>> {
        let date_idx: usize = self.column_index(DATE_COLUMN).ok_or_else(|| {
            anyhow!("[MetricsTable->date_column_values] The 'DATE' column is missing from the data")
        })?;

        let mut date_values: Vec<NaiveDateTime> = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let cell: &MetricsValue = row.get(date_idx).unwrap_or(&MetricsValue::Null);

            let datetime: NaiveDateTime = match cell {
                MetricsValue::Date(datetime) => *datetime,
                MetricsValue::Text(raw) => parse_metrics_datetime(raw).map_err(|e| {
                    anyhow!(
                        "[MetricsTable->date_column_values] The 'DATE' column could not be parsed as datetime: {:?}",
                        e
                    )
                })?,
                MetricsValue::Number(_) | MetricsValue::Null => {
                    return Err(anyhow!(
                        "[MetricsTable->date_column_values] The 'DATE' column could not be parsed as datetime"
                    ));
                }
            };

            date_values.push(datetime);
        }

        Ok(date_values)
    }

    #[doc = "수치값을 하나 이상 가진 비-DATE 컬럼들의 인덱스 목록"]
    pub fn numeric_column_indices(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, column)| {
                column.as_str() != DATE_COLUMN
                    && self
                        .rows
                        .iter()
                        .any(|row| row.get(*idx).map(MetricsValue::is_number).unwrap_or(false))
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    #[doc = r#"
        수치 컬럼들을 [0,1] 구간으로 min-max 정규화한 사본을 반환해주는 함수.

        컬럼의 max 와 min 이 같은 경우 (값이 전부 동일한 경우) 는 0으로 나누기를
        피하기 위해 `value - min`, 즉 상수 0 으로 내려간다.
    "#]
    pub fn normalized(&self) -> MetricsTable {
        let mut normalized: MetricsTable = self.clone();

        for idx in self.numeric_column_indices() {
            let values: Vec<f64> = self
                .rows
                .iter()
                .filter_map(|row| row.get(idx).and_then(MetricsValue::as_number))
                .collect();

            let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range: f64 = max_val - min_val;

            for row in normalized.rows.iter_mut() {
                if let Some(MetricsValue::Number(value)) = row.get_mut(idx) {
                    *value = if range != 0.0 {
                        (*value - min_val) / range
                    } else {
                        0.0
                    };
                }
            }
        }

        normalized
    }

    #[doc = "컬럼 단위 dump. LLM 프롬프트에 내장되는 형태 (ex. {\"PE_RATIO\": [1.0, 2.0]})"]
    pub fn column_oriented_json(&self) -> anyhow::Result<Value> {
        let mut dump: serde_json::Map<String, Value> = serde_json::Map::new();

        for (idx, column) in self.columns.iter().enumerate() {
            let cells: Vec<&MetricsValue> = self
                .rows
                .iter()
                .map(|row| row.get(idx).unwrap_or(&MetricsValue::Null))
                .collect();

            dump.insert(column.clone(), serde_json::to_value(cells)?);
        }

        Ok(Value::Object(dump))
    }

    #[doc = "row 단위 dump. 분석 결과의 summary 필드로 사용"]
    pub fn records_json(&self) -> anyhow::Result<Value> {
        let mut records: Vec<Value> = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let mut record: serde_json::Map<String, Value> = serde_json::Map::new();

            for (idx, column) in self.columns.iter().enumerate() {
                let cell: &MetricsValue = row.get(idx).unwrap_or(&MetricsValue::Null);
                record.insert(column.clone(), serde_json::to_value(cell)?);
            }

            records.push(Value::Object(record));
        }

        Ok(Value::Array(records))
    }
}
