/*
Author      : Seunghwan Shin
Create date : 2026-08-00
Description :

History     : 2026-08-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::{llm_repository_impl::*, warehouse_repository_impl::*};

mod env_configuration;

mod traits;

mod model;
use model::configs::warehouse_config::*;

mod dto;
mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    chart_service_impl::*, graph_spec_service_impl::*, insight_service_impl::*,
    query_service_impl::*,
};

mod controller;
use controller::main_controller::*;

/* 단일 실행 시나리오에서 사용하는 모델명 */
const ANALYSIS_MODEL_NAME: &str = "gemini-2.0-flash";

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Valuation analysis agent start!");

    /* Warehouse connection */
    let warehouse_config: WarehouseConfig = WarehouseConfig::from_env();

    let warehouse_repo: WarehouseRepositoryImpl = WarehouseRepositoryImpl::new(&warehouse_config)
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing warehouse_repo.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* LLM client - provider 는 모델명 substring 으로 결정된다 */
    let llm_repo: Arc<LlmRepositoryImpl> = Arc::new(
        LlmRepositoryImpl::new(ANALYSIS_MODEL_NAME).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing llm_repo.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        }),
    );

    /* 의존 주입 */
    let query_service: QueryServiceImpl<WarehouseRepositoryImpl> =
        QueryServiceImpl::new(warehouse_repo, warehouse_config.schema().to_string());
    let graph_spec_service: GraphSpecServiceImpl<LlmRepositoryImpl> =
        GraphSpecServiceImpl::new(Arc::clone(&llm_repo));
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let insight_service: InsightServiceImpl<LlmRepositoryImpl> =
        InsightServiceImpl::new(Arc::clone(&llm_repo));

    let main_controller: MainController<
        QueryServiceImpl<WarehouseRepositoryImpl>,
        GraphSpecServiceImpl<LlmRepositoryImpl>,
        ChartServiceImpl,
        InsightServiceImpl<LlmRepositoryImpl>,
    > = MainController::new(
        query_service,
        graph_spec_service,
        chart_service,
        insight_service,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
