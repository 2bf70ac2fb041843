// 목적:
// - 비동기 파이프라인을 동기 함수 한 번의 호출로 노출한다.
//
// 설명:
// - 호출마다 Tokio 런타임과 HTTP 클라이언트를 새로 만들어 호출 간 상태를 공유하지 않는다.
// - 이미 Tokio 런타임 안에 있는 스레드에서 호출하면 block_on 중첩 대신 Runtime 오류를 돌려준다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/knowledge_pipeline.rs

use tokio::runtime::{Builder, Handle, Runtime};

use crate::core::errors::{CoreError, CoreResult};
use crate::core::knowledge_pipeline::{execute_lookup, KnowledgeConfigPayload};

/// 기본 설정(영문 위키백과)으로 질의를 markdown 문서로 변환한다.
pub fn resolve_and_render(query: &str) -> CoreResult<String> {
    resolve_and_render_with(&KnowledgeConfigPayload::default(), query)
}

pub fn resolve_and_render_with(config: &KnowledgeConfigPayload, query: &str) -> CoreResult<String> {
    if Handle::try_current().is_ok() {
        return Err(CoreError::Runtime(
            "Tokio 런타임 안에서는 동기 호출을 쓸 수 없습니다. execute_lookup을 사용하세요".to_string(),
        ));
    }

    let runtime = create_runtime()?;
    runtime.block_on(execute_lookup(config, query))
}

/// 설정 JSON을 해석한다. 비어 있으면 기본값을 사용한다.
pub fn parse_config(config_json: Option<&str>) -> CoreResult<KnowledgeConfigPayload> {
    match config_json.map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw).map_err(|error| {
            CoreError::InvalidConfig(format!("설정 JSON 파싱에 실패했습니다: {}", error))
        }),
        _ => Ok(KnowledgeConfigPayload::default()),
    }
}

fn create_runtime() -> CoreResult<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| CoreError::Runtime(format!("Tokio 런타임 생성 실패: {}", error)))
}
