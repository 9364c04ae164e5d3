use crate::common::*;

#[doc = "로그 양식 포멧터"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정해주는 함수.

    1. `logs` 디렉토리 하위에 일 단위로 회전하는 로그파일을 생성
    2. 동일한 로그를 표준출력으로 복제하여 콘솔에서도 확인 가능하게 함
    3. 최근 10개의 로그파일만 유지

    # Panics
    로거 초기화에 실패한 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    let file_spec: FileSpec = FileSpec::default().directory("logs").suppress_timestamp();

    Logger::try_with_str("info")
        .expect("Failed to build logger")
        .log_to_file(file_spec)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .start()
        .expect("Failed to start logger");
}
