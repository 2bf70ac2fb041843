// 목적:
// - 정규 제목에 해당하는 문서 HTML을 조회하고 검증한다.
//
// 설명:
// - 리다이렉트 추적은 본문 서비스에 위임한다(로컬 루프 없음).
// - 서비스가 명시적으로 오류를 보고하면 Retrieval, 본문이 비어 있으면 EmptyContent로 구분한다.
//
// 디자인 패턴:
// - 검증 경계(Validation Boundary).
//
// 참조:
// - src_rs/source/service.rs
// - src_rs/core/knowledge_pipeline.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};
use crate::source::service::{ContentSource, RedirectHop};

/// 리다이렉트 해석이 끝난 문서 본문이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContent {
    pub title: String,
    pub html: String,
    pub redirects: Vec<RedirectHop>,
}

/// 제목으로 문서 본문을 조회한다.
pub async fn fetch_content<C>(source: &C, title: &str) -> CoreResult<ParsedContent>
where
    C: ContentSource,
{
    let response = source.fetch(title).await?;

    if let Some(message) = response.error {
        return Err(CoreError::Retrieval(message));
    }

    let html = response
        .html
        .filter(|html| !html.trim().is_empty())
        .ok_or_else(|| CoreError::EmptyContent(format!("title={}", title)))?;

    Ok(ParsedContent {
        title: response.title.unwrap_or_else(|| title.to_string()),
        html,
        redirects: response.redirects,
    })
}
