// 목적:
// - 확장 모듈용 tracing 구독자를 설치한다.
//
// 설명:
// - RUST_LOG가 있으면 그 필터를, 없으면 warn 수준을 사용한다.
// - stdout은 호스트(도구 서버)의 프로토콜 채널일 수 있으므로 stderr로만 출력한다.
// - 이미 구독자가 있으면 아무것도 하지 않는다.
//
// 참조:
// - src_rs/lib.rs

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
