use crate::common::*;

use crate::model::{chart::chart_spec::*, metrics::metrics_table::*};

#[async_trait]
pub trait GraphSpecService: Send + Sync {
    #[doc = r#"
        데이터를 LLM 에 보여주고 차트 spec 을 받아오는 함수.
        실패는 오류가 아니라 빈 spec 으로 내려간다. 기본값 적용은 호출자 책임.
    "#]
    async fn get_graph_specs(&self, table: &MetricsTable) -> ChartSpec;
}
