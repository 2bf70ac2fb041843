// 목적:
// - 자유 텍스트 질의를 정규 문서 제목으로 변환한다.
//
// 설명:
// - 질의는 가공 없이 검색 서비스에 전달하고, 결과는 1건으로 제한한다.
// - 후보가 없으면 NotFound로 파이프라인을 중단한다.
//
// 디자인 패턴:
// - 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/source/service.rs
// - src_rs/core/knowledge_pipeline.rs

use crate::core::errors::{CoreError, CoreResult};
use crate::source::service::TitleSearch;

pub const SEARCH_LIMIT: usize = 1;

/// 질의에 대한 첫 번째 검색 후보 제목을 반환한다.
pub async fn resolve_title<S>(search: &S, query: &str) -> CoreResult<String>
where
    S: TitleSearch,
{
    let result = search.search(query, SEARCH_LIMIT).await?;

    result
        .titles
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::NotFound(format!("query={}", query)))
}
