use crate::common::*;

use crate::model::{configs::warehouse_config::*, metrics::metrics_table::*, metrics::metrics_value::*};

use crate::traits::repository_traits::warehouse_repository::*;

use crate::utils_modules::time_utils::*;

#[derive(Clone)]
pub struct WarehouseRepositoryImpl {
    pool: Pool,
}

impl WarehouseRepositoryImpl {
    #[doc = r#"
        접속 설정으로 커넥션 풀을 생성해주는 함수.

        풀은 프로세스 시작 시 1회 생성되어 전체 쿼리에 재사용된다.
        재시도 정책은 없으며, 커넥션 오류는 호출자에게 그대로 전파된다.

        # Arguments
        * `config` - 호출자가 소유한 웨어하우스 접속 설정

        # Returns
        * `Result<Self, anyhow::Error>` - 풀 생성 실패 시 오류
    "#]
    pub fn new(config: &WarehouseConfig) -> Result<Self, anyhow::Error> {
        let pool: Pool = Manager::new()
            .host(config.account())
            .port(*config.port())
            .basic_authentication(config.user(), config.password())
            .database(config.database())
            .application_name(config.warehouse())
            .trust_cert()
            .max_size(2)
            .create_pool()
            .map_err(|e| {
                anyhow!(
                    "[WarehouseRepositoryImpl->new] Failed to build the warehouse connection pool: {:?}",
                    e
                )
            })?;

        Ok(WarehouseRepositoryImpl { pool })
    }

    #[doc = r#"
        셀 하나를 MetricsValue 로 변환해주는 함수.

        타입별 추출을 순서대로 시도한다:
        float/int/decimal → Number, datetime/date → Date,
        문자열은 수치 → 날짜 → 텍스트 순으로 해석, 그 외 / NULL → Null
    "#]
    fn convert_cell(row: &Row, idx: usize) -> MetricsValue {
        if let Ok(Some(value)) = row.try_get::<f64, _>(idx) {
            return MetricsValue::Number(value);
        }
        if let Ok(Some(value)) = row.try_get::<f32, _>(idx) {
            return MetricsValue::Number(value as f64);
        }
        if let Ok(Some(value)) = row.try_get::<i64, _>(idx) {
            return MetricsValue::Number(value as f64);
        }
        if let Ok(Some(value)) = row.try_get::<i32, _>(idx) {
            return MetricsValue::Number(value as f64);
        }
        if let Ok(Some(value)) = row.try_get::<Numeric, _>(idx) {
            return Self::decimal_to_number(value);
        }
        if let Ok(Some(value)) = row.try_get::<NaiveDateTime, _>(idx) {
            return MetricsValue::Date(value);
        }
        if let Ok(Some(value)) = row.try_get::<NaiveDate, _>(idx) {
            if let Some(datetime) = value.and_hms_opt(0, 0, 0) {
                return MetricsValue::Date(datetime);
            }
        }
        if let Ok(Some(raw)) = row.try_get::<&str, _>(idx) {
            let trimmed: &str = raw.trim();

            if let Ok(number) = trimmed.parse::<f64>() {
                return MetricsValue::Number(number);
            }
            if let Ok(datetime) = parse_metrics_datetime(trimmed) {
                return MetricsValue::Date(datetime);
            }
            return MetricsValue::Text(trimmed.to_string());
        }

        MetricsValue::Null
    }

    #[doc = "DECIMAL/NUMERIC 값을 f64 Number 로 변환. valuation 지표 컬럼의 기본 타입"]
    fn decimal_to_number(value: Numeric) -> MetricsValue {
        MetricsValue::Number(f64::from(value))
    }
}

#[async_trait]
impl WarehouseRepository for WarehouseRepositoryImpl {
    #[doc = "Function that EXECUTES warehouse queries - select into MetricsTable"]
    async fn fetch_table(&self, sql: &str) -> Result<MetricsTable, anyhow::Error> {
        let mut client = self.pool.get().await.map_err(|e| {
            anyhow!(
                "[WarehouseRepositoryImpl->fetch_table] Failed to acquire a warehouse connection: {:?}",
                e
            )
        })?;

        let rows: Vec<Row> = client
            .simple_query(sql)
            .await
            .map_err(|e| {
                anyhow!(
                    "[WarehouseRepositoryImpl->fetch_table] Query execution failed: {:?}",
                    e
                )
            })?
            .into_first_result()
            .await
            .map_err(|e| {
                anyhow!(
                    "[WarehouseRepositoryImpl->fetch_table] Failed to read the result set: {:?}",
                    e
                )
            })?;

        let columns: Vec<String> = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|column| column.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut converted_rows: Vec<Vec<MetricsValue>> = Vec::with_capacity(rows.len());

        for row in &rows {
            let mut cells: Vec<MetricsValue> = Vec::with_capacity(columns.len());

            for idx in 0..columns.len() {
                cells.push(Self::convert_cell(row, idx));
            }

            converted_rows.push(cells);
        }

        Ok(MetricsTable::new(columns, converted_rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_cells_convert_to_numbers() {
        assert_eq!(
            WarehouseRepositoryImpl::decimal_to_number(Numeric::new_with_scale(6125, 2)),
            MetricsValue::Number(61.25)
        );
        assert_eq!(
            WarehouseRepositoryImpl::decimal_to_number(Numeric::new_with_scale(-250, 2)),
            MetricsValue::Number(-2.5)
        );
    }

    #[test]
    fn zero_scale_decimal_converts_to_a_whole_number() {
        assert_eq!(
            WarehouseRepositoryImpl::decimal_to_number(Numeric::new_with_scale(42, 0)),
            MetricsValue::Number(42.0)
        );
    }
}
