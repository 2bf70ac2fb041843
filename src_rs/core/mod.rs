// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 제목 해석 -> 본문 조회 -> 렌더링 파이프라인과 공통 오류 모델을 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/title_resolver.rs
// - src_rs/core/content_fetcher.rs
// - src_rs/core/knowledge_pipeline.rs

pub mod content_fetcher;
pub mod errors;
pub mod knowledge_pipeline;
pub mod title_resolver;
