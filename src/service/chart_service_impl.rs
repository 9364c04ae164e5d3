use crate::common::*;

use crate::enums::graph_kind::*;

use crate::model::{chart::chart_spec::*, metrics::metrics_table::*, metrics::metrics_value::*};

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::time_utils::*;

use plotters::prelude::*;

/* matplotlib Set2 계열의 고정 categorical palette */
const METRIC_PALETTE: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = "컬럼명을 범례 라벨로 다듬어주는 함수 (PE_RATIO -> Pe Ratio)"]
    fn prettify_label(column: &str) -> String {
        column
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let lowered: String = word.to_lowercase();
                let mut chars = lowered.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    #[doc = "정규화된 테이블에서 (라벨, 값 목록) 시리즈를 추출. 수치가 아닌 셀은 0으로 처리"]
    fn extract_series(table: &MetricsTable) -> Vec<(String, Vec<f64>)> {
        table
            .numeric_column_indices()
            .into_iter()
            .map(|idx| {
                let label: String = Self::prettify_label(&table.columns()[idx]);
                let values: Vec<f64> = table
                    .rows()
                    .iter()
                    .map(|row| {
                        row.get(idx)
                            .and_then(MetricsValue::as_number)
                            .unwrap_or(0.0)
                    })
                    .collect();

                (label, values)
            })
            .collect()
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    #[doc = r#"
        MetricsTable 을 차트 이미지로 렌더링해주는 함수.

        1. DATE 컬럼 검증 후 X축 라벨 생성
        2. 수치 컬럼을 [0,1] 로 정규화
        3. spec 의 Type 값으로 stacked-area / line 을 선택
        4. 라벨과 제목은 spec 에서 가져오되 기본값으로 보충
        5. 렌더링은 blocking task 에서 수행하고 기존 파일은 그대로 덮어씀

        # Returns
        * `Result<PathBuf, anyhow::Error>` - 저장된 차트 파일 경로
    "#]
    async fn generate_metrics_chart(
        &self,
        table: &MetricsTable,
        spec: &ChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<PathBuf> {
        if table.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_metrics_chart] Cannot generate chart with empty data"
            ));
        }

        let dates: Vec<NaiveDateTime> = table.date_column_values()?;
        let x_labels: Vec<String> = dates.iter().map(format_chart_label).collect();

        let normalized: MetricsTable = table.normalized();
        let series: Vec<(String, Vec<f64>)> = Self::extract_series(&normalized);

        let graph_kind: GraphKind = GraphKind::from_spec(spec);
        let title: String = format!("{} (Normalized)", spec.title());
        let x_desc: String = spec.x_axis().to_string();
        let y_desc: String = spec.y_axis().to_string();

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let output_path_buf: PathBuf = output_path.to_path_buf();
        let output_path_str: String = output_path.to_string_lossy().to_string();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                /* ---- 여기부터는 동기 코드 (plotters) ---- */
                draw_metrics_chart(
                    &output_path_str,
                    &title,
                    &x_desc,
                    &y_desc,
                    &x_labels,
                    &series,
                    graph_kind,
                )
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_metrics_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_metrics_chart] drawing/present failed")?;

        info!("Metrics chart generated successfully: {:?}", output_path_buf);

        Ok(output_path_buf)
    }

    #[doc = r#"
        최신 지표 테이블을 날짜별 grouped bar 차트로 렌더링해주는 함수.

        X축은 지표명, Y축은 원본 값 그대로이며 날짜가 범례가 된다.
        요약 경로 전용이라 spec 없이 고정 라벨을 사용한다.

        # Returns
        * `Result<PathBuf, anyhow::Error>` - 저장된 차트 파일 경로
    "#]
    async fn generate_summary_chart(
        &self,
        table: &MetricsTable,
        output_path: &Path,
    ) -> anyhow::Result<PathBuf> {
        if table.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_summary_chart] Cannot generate chart with empty data"
            ));
        }

        let dates: Vec<NaiveDateTime> = table.date_column_values()?;
        let date_labels: Vec<String> = dates.iter().map(format_chart_label).collect();

        let series: Vec<(String, Vec<f64>)> = Self::extract_series(table);

        if series.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_summary_chart] No numeric columns to plot"
            ));
        }

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let output_path_buf: PathBuf = output_path.to_path_buf();
        let output_path_str: String = output_path.to_string_lossy().to_string();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                draw_summary_chart(&output_path_str, &date_labels, &series)
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_summary_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_summary_chart] drawing/present failed")?;

        info!("Summary chart generated successfully: {:?}", output_path_buf);

        Ok(output_path_buf)
    }
}

fn draw_metrics_chart(
    output_path: &str,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    x_labels: &[String],
    series: &[(String, Vec<f64>)],
    graph_kind: GraphKind,
) -> Result<(), anyhow::Error> {
    let root = BitMapBackend::new(output_path, (1400, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    /* 누적 합. stacked 경로의 y 범위와 band 계산에 사용 */
    let row_count: usize = x_labels.len();
    let mut cumulative: Vec<Vec<f64>> = Vec::with_capacity(series.len());
    let mut running: Vec<f64> = vec![0.0; row_count];

    for (_, values) in series {
        for (idx, value) in values.iter().enumerate() {
            running[idx] += value;
        }
        cumulative.push(running.clone());
    }

    let y_max: f64 = match graph_kind {
        GraphKind::Stacked => cumulative
            .last()
            .map(|totals| totals.iter().copied().fold(0.0, f64::max))
            .unwrap_or(1.0)
            .max(1.0),
        GraphKind::Line => 1.0,
    } * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40).into_font())
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0..x_labels.len() - 1, 0f64..y_max)?;

    let grid_color: RGBColor = RGBColor(220, 220, 220);

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(x_labels.len().min(10))
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
        .x_label_style(("sans-serif", 18).into_font())
        .y_label_style(("sans-serif", 18).into_font())
        .x_label_formatter(&|x| {
            if *x < x_labels.len() {
                x_labels[*x].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    match graph_kind {
        GraphKind::Stacked => {
            /* 누적값이 큰 컬럼부터 깔아서 아래 band 가 위에 덮이도록 한다 */
            for (idx, _) in series.iter().enumerate().rev() {
                let color: RGBColor = METRIC_PALETTE[idx % METRIC_PALETTE.len()];
                let band: Vec<(usize, f64)> = cumulative[idx]
                    .iter()
                    .copied()
                    .enumerate()
                    .collect();

                chart.draw_series(AreaSeries::new(band, 0.0, color.mix(0.8)))?;
            }

            /* 범례는 그리기 순서와 무관하게 컬럼 순서대로 등록한다 */
            for (idx, (label, _)) in series.iter().enumerate() {
                let color: RGBColor = METRIC_PALETTE[idx % METRIC_PALETTE.len()];

                chart
                    .draw_series(std::iter::empty::<Rectangle<(usize, f64)>>())?
                    .label(label.clone())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.8).filled())
                    });
            }
        }
        GraphKind::Line => {
            for (idx, (label, values)) in series.iter().enumerate() {
                let color: RGBColor = METRIC_PALETTE[idx % METRIC_PALETTE.len()];
                let points: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();

                chart
                    .draw_series(LineSeries::new(
                        points.clone(),
                        ShapeStyle::from(&color).stroke_width(2),
                    ))?
                    .label(label.clone())
                    .legend(move |(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 10, y)],
                            ShapeStyle::from(&color).stroke_width(2),
                        )
                    });

                /* line 경로는 marker 를 함께 찍는다 */
                chart.draw_series(
                    points
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), 4, color.filled())),
                )?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 16).into_font())
        .draw()?;

    root.present()?;

    Ok(())
}

fn draw_summary_chart(
    output_path: &str,
    date_labels: &[String],
    series: &[(String, Vec<f64>)],
) -> Result<(), anyhow::Error> {
    let root = BitMapBackend::new(output_path, (1400, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let metric_count: usize = series.len();
    let date_count: usize = date_labels.len();

    let y_max: f64 = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.05;

    let metric_labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("NVIDIA Valuation Metrics", ("sans-serif", 40).into_font())
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..metric_count as f64, 0f64..y_max)?;

    let grid_color: RGBColor = RGBColor(220, 220, 220);

    chart
        .configure_mesh()
        .x_desc("Metric")
        .y_desc("Value")
        .disable_x_mesh()
        .x_labels(metric_count + 1)
        .y_labels(10)
        .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
        .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(2))
        .x_label_style(("sans-serif", 18).into_font())
        .y_label_style(("sans-serif", 18).into_font())
        .x_label_formatter(&|x| {
            /* 지표 slot 의 정수 경계에만 지표명을 붙인다 */
            let idx: usize = x.round() as usize;
            if (x - idx as f64).abs() < f64::EPSILON && idx < metric_labels.len() {
                metric_labels[idx].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    /* 지표 slot [i, i+1) 안에 날짜별 bar 를 나란히 배치한다 */
    let band_width: f64 = 0.8 / date_count as f64;

    for (date_idx, date_label) in date_labels.iter().enumerate() {
        let color: RGBColor = METRIC_PALETTE[date_idx % METRIC_PALETTE.len()];

        let bars: Vec<Rectangle<(f64, f64)>> = series
            .iter()
            .enumerate()
            .map(|(metric_idx, (_, values))| {
                let x0: f64 = metric_idx as f64 + 0.1 + date_idx as f64 * band_width;
                let x1: f64 = x0 + band_width;

                Rectangle::new([(x0, 0.0), (x1, values[date_idx])], color.filled())
            })
            .collect();

        chart
            .draw_series(bars)?
            .label(date_label.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 16).into_font())
        .draw()?;

    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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
                    MetricsValue::Number(10.0),
                    MetricsValue::Number(3.0),
                ],
                vec![
                    MetricsValue::Text("2024-01-02".to_string()),
                    MetricsValue::Number(30.0),
                    MetricsValue::Number(6.0),
                ],
                vec![
                    MetricsValue::Text("2024-01-03".to_string()),
                    MetricsValue::Number(20.0),
                    MetricsValue::Number(9.0),
                ],
            ],
        )
    }

    #[test]
    fn prettify_label_title_cases_underscored_columns() {
        assert_eq!(ChartServiceImpl::prettify_label("PE_RATIO"), "Pe Ratio");
        assert_eq!(
            ChartServiceImpl::prettify_label("MARKET_CAP_INTRADAY"),
            "Market Cap Intraday"
        );
    }

    #[tokio::test]
    async fn line_spec_renders_a_chart_file() {
        let output_path: PathBuf =
            std::env::temp_dir().join("valuation_agent_line_chart_test.png");
        let spec: ChartSpec = ChartSpec::from_response("Type: line\nTitle: Test Chart").unwrap();

        let rendered: PathBuf = ChartServiceImpl::new()
            .generate_metrics_chart(&sample_table(), &spec, &output_path)
            .await
            .unwrap();

        assert_eq!(rendered, output_path);
        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn stacked_spec_renders_a_chart_file() {
        let output_path: PathBuf =
            std::env::temp_dir().join("valuation_agent_stacked_chart_test.png");
        let spec: ChartSpec = ChartSpec::from_response("Type: STACKED").unwrap();

        ChartServiceImpl::new()
            .generate_metrics_chart(&sample_table(), &spec, &output_path)
            .await
            .unwrap();

        assert!(output_path.exists());
    }

    #[tokio::test]
    async fn summary_bar_chart_renders_a_file() {
        let output_path: PathBuf =
            std::env::temp_dir().join("valuation_agent_summary_chart_test.png");

        let rendered: PathBuf = ChartServiceImpl::new()
            .generate_summary_chart(&sample_table(), &output_path)
            .await
            .unwrap();

        assert_eq!(rendered, output_path);
        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn summary_bar_chart_rejects_an_empty_table() {
        let table: MetricsTable = MetricsTable::new(vec!["DATE".to_string()], vec![]);
        let output_path: PathBuf =
            std::env::temp_dir().join("valuation_agent_summary_empty_test.png");

        let error: String = ChartServiceImpl::new()
            .generate_summary_chart(&table, &output_path)
            .await
            .unwrap_err()
            .to_string();

        assert!(error.contains("empty data"));
    }

    #[tokio::test]
    async fn missing_date_column_fails_with_date_in_the_message() {
        let table: MetricsTable = MetricsTable::new(
            vec!["PE_RATIO".to_string()],
            vec![vec![MetricsValue::Number(10.0)]],
        );
        let output_path: PathBuf =
            std::env::temp_dir().join("valuation_agent_no_date_chart_test.png");

        let error: String = ChartServiceImpl::new()
            .generate_metrics_chart(&table, &ChartSpec::empty(), &output_path)
            .await
            .unwrap_err()
            .to_string();

        assert!(error.contains("DATE"));
    }
}
