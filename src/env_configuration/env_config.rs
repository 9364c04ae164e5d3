use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    데이터 웨어하우스 접속정보는 전부 환경변수로 관리되므로, 해당 환경변수가 없으면
    애플리케이션이 정상 동작할 수 없기 때문에 panic으로 즉시 종료시킨다.

    1. 환경변수 `key`에 해당하는 값을 `env::var()`로 조회
    2. 값이 존재하면 해당 값을 문자열로 반환
    3. 값이 없으면:
       - 에러 메시지를 구성하여 error 레벨로 로깅
       - 동일한 메시지로 panic 발생시켜 애플리케이션 종료

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = "웨어하우스 접속 계정명"]
pub static WAREHOUSE_USER: once_lazy<String> = once_lazy::new(|| get_env_or_panic("WAREHOUSE_USER"));

#[doc = "웨어하우스 접속 비밀번호"]
pub static WAREHOUSE_PASSWORD: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("WAREHOUSE_PASSWORD"));

#[doc = "웨어하우스 계정 호스트 주소"]
pub static WAREHOUSE_ACCOUNT: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("WAREHOUSE_ACCOUNT"));

#[doc = "조회 대상 데이터베이스명"]
pub static WAREHOUSE_DATABASE: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("WAREHOUSE_DATABASE"));

#[doc = "`Valuation_Measures` 테이블이 속한 스키마명"]
pub static WAREHOUSE_SCHEMA: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("WAREHOUSE_SCHEMA"));

#[doc = r#"
    웨어하우스 이름. T-SQL 드라이버에는 대응되는 개념이 없으므로
    커넥션의 application name 으로 전달한다.
"#]
pub static WAREHOUSE_NAME: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("WAREHOUSE_NAME"));

#[doc = "웨어하우스 접속 포트. 미설정 시 1433 사용"]
pub static WAREHOUSE_PORT: once_lazy<u16> = once_lazy::new(|| {
    env::var("WAREHOUSE_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(1433)
});

#[doc = "LLM 차트 출력 파일의 고정 경로"]
pub static CHART_OUTPUT_PATH: once_lazy<String> =
    once_lazy::new(|| String::from("llm_generated_graph.png"));

#[doc = "요약 경로의 bar 차트 출력 파일 고정 경로"]
pub static SUMMARY_CHART_OUTPUT_PATH: once_lazy<String> =
    once_lazy::new(|| String::from("valuation_summary_graph.png"));
