// 목적:
// - 검색 서비스와 본문 서비스의 좁은 능력 인터페이스를 정의한다.
//
// 설명:
// - 파이프라인은 이 trait만 의존하므로 테스트 대역이 고정 응답을 대신 제공할 수 있다.
// - 응답 검증(빈 후보, 오류 필드, 빈 본문)은 core 계층이 담당한다.
//
// 디자인 패턴:
// - 능력 인터페이스(Capability Interface).
//
// 참조:
// - src_rs/source/mediawiki_http.rs
// - src_rs/core/title_resolver.rs
// - src_rs/core/content_fetcher.rs

#![allow(async_fn_in_trait)]

use serde::{Deserialize, Serialize};

use crate::core::errors::CoreResult;

/// 검색 서비스 응답이다. `[query, titles, descriptions, urls]` 형태를 펼친 값이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub titles: Vec<String>,
    pub descriptions: Vec<String>,
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectHop {
    pub from: String,
    pub to: String,
}

/// 본문 서비스 응답이다. 검증 전 상태이므로 오류/빈 본문이 모두 올 수 있다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResponse {
    pub error: Option<String>,
    pub title: Option<String>,
    pub html: Option<String>,
    pub redirects: Vec<RedirectHop>,
}

pub trait TitleSearch {
    async fn search(&self, query: &str, limit: usize) -> CoreResult<SearchResult>;
}

pub trait ContentSource {
    /// 리다이렉트를 서비스 측에서 따라간 결과를 반환한다.
    async fn fetch(&self, title: &str) -> CoreResult<ContentResponse>;
}
