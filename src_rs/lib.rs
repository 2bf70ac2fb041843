#![allow(non_local_definitions)]

// 목적:
// - 위키 지식 조회 Rust 코어의 진입점을 제공한다.
//
// 설명:
// - 질의 -> 정규 제목 -> 문서 HTML -> markdown 파이프라인을 라이브러리로 제공한다.
// - `python` feature가 켜지면 Python 확장 모듈(_wiki_knowledge)로도 빌드된다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/render/source).
//
// 참조:
// - src_rs/core/knowledge_pipeline.rs
// - src_rs/api/knowledge_bridge.rs

pub mod api;
pub mod core;
pub mod render;
pub mod source;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _wiki_knowledge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::logging::init_tracing();
    api::knowledge_bridge::register(m)
}
