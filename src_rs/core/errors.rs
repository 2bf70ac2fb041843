// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 전송/검색 실패/본문 조회 실패/빈 본문을 명시적으로 구분해 호출자에게 전달한다.
// - 설정/런타임 오류는 파이프라인 바깥 경계에서만 발생한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/title_resolver.rs
// - src_rs/core/content_fetcher.rs
// - src_rs/api/knowledge_bridge.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("HTTP 호출에 실패했습니다: {0}")]
    Transport(String),
    #[error("검색 결과가 없습니다: {0}")]
    NotFound(String),
    #[error("문서 조회 중 서비스 오류가 발생했습니다: {0}")]
    Retrieval(String),
    #[error("문서 본문이 비어 있습니다: {0}")]
    EmptyContent(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
