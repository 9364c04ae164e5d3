use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = r#"
    데이터 웨어하우스 접속 설정.

    호출자가 생성해서 repository 에 주입한다. 커넥션 수명은 주입받은 쪽이 아니라
    이 설정을 만든 쪽 (main) 이 소유한다.

    # Fields
    * `account` - 웨어하우스 계정 호스트
    * `port` - 접속 포트
    * `user` / `password` - 접속 계정
    * `database` - 대상 데이터베이스
    * `schema` - `Valuation_Measures` 테이블이 속한 스키마
    * `warehouse` - 웨어하우스명. application name 으로 전달됨
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct WarehouseConfig {
    pub account: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub schema: String,
    pub warehouse: String,
}

impl WarehouseConfig {
    #[doc = "환경변수에서 접속 설정을 구성해주는 함수. 필수값 누락 시 panic"]
    pub fn from_env() -> Self {
        WarehouseConfig::new(
            WAREHOUSE_ACCOUNT.to_string(),
            *WAREHOUSE_PORT,
            WAREHOUSE_USER.to_string(),
            WAREHOUSE_PASSWORD.to_string(),
            WAREHOUSE_DATABASE.to_string(),
            WAREHOUSE_SCHEMA.to_string(),
            WAREHOUSE_NAME.to_string(),
        )
    }
}
