// 목적:
// - 외부 호출 경계 모듈을 선언한다.
//
// 설명:
// - 동기 호출 진입점(blocking)과 로그 초기화를 항상 제공한다.
// - Python 브릿지는 `python` feature가 켜졌을 때만 빌드한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/blocking.rs
// - src_rs/api/knowledge_bridge.rs
// - src_rs/api/logging.rs

pub mod blocking;
#[cfg(feature = "python")]
pub mod knowledge_bridge;
pub mod logging;
