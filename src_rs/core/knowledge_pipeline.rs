// 목적:
// - 지식 조회 작업의 핵심 파이프라인을 실행한다.
//
// 설명:
// - 제목 해석 -> 본문 조회 -> markdown 렌더링 순서로 처리한다.
// - 병렬 처리/부분 결과 없이 첫 번째 실패를 그대로 호출자에게 돌려준다.
// - 호출 간 공유 상태가 없으므로 여러 호출이 동시에 실행되어도 된다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/core/title_resolver.rs
// - src_rs/core/content_fetcher.rs
// - src_rs/render/markdown.rs

use serde::{Deserialize, Serialize};

use crate::core::content_fetcher::fetch_content;
use crate::core::errors::CoreResult;
use crate::core::title_resolver::resolve_title;
use crate::render::markdown::{MarkdownRenderer, RenderOptions};
use crate::source::mediawiki_http::{MediaWikiClient, WikiHttpConfigPayload};
use crate::source::service::{ContentSource, TitleSearch};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfigPayload {
    pub wiki: WikiHttpConfigPayload,
    pub render: RenderOptions,
}

/// 질의를 문서로 해석해 markdown으로 반환한다.
pub async fn resolve_and_render<S, C>(
    search: &S,
    content: &C,
    renderer: &MarkdownRenderer,
    query: &str,
) -> CoreResult<String>
where
    S: TitleSearch,
    C: ContentSource,
{
    let title = resolve_title(search, query).await?;
    let parsed = fetch_content(content, &title).await?;
    Ok(renderer.render(&parsed.html))
}

/// 설정 페이로드로 MediaWiki 클라이언트와 렌더러를 만든 뒤 파이프라인을 실행한다.
pub async fn execute_lookup(config: &KnowledgeConfigPayload, query: &str) -> CoreResult<String> {
    let client = MediaWikiClient::new(config.wiki.clone())?;
    let renderer = MarkdownRenderer::new(config.render.clone())?;
    resolve_and_render(&client, &client, &renderer, query).await
}
