// 목적:
// - MediaWiki API에 대한 검색/본문 HTTP 호출을 담당한다.
//
// 설명:
// - opensearch(limit=1)로 제목 후보를 찾고, parse(redirects=1)로 최종 문서 HTML을 받는다.
// - 모든 요청은 고정된 User-Agent로 클라이언트를 식별한다.
// - 재시도는 하지 않으며 상태 오류/본문 읽기 실패는 Transport 오류로 돌려준다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/source/service.rs
// - src_rs/source/response.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};
use crate::source::response::{parse_content_body, parse_opensearch_body};
use crate::source::service::{ContentResponse, ContentSource, SearchResult, TitleSearch};

pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str =
    "WikiExplainer/1.0 (https://github.com/ivoras/wikiexplainer)";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiHttpConfigPayload {
    pub api_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
}

impl Default for WikiHttpConfigPayload {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Clone)]
pub struct MediaWikiClient {
    client: Client,
    config: WikiHttpConfigPayload,
}

impl MediaWikiClient {
    pub fn new(config: WikiHttpConfigPayload) -> CoreResult<Self> {
        if config.api_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "wiki.api_url은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if config.user_agent.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "wiki.user_agent는 비어 있을 수 없습니다".to_string(),
            ));
        }

        if config.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "wiki.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|error| {
                CoreError::Transport(format!("HTTP 클라이언트 생성 실패: {}", error))
            })?;

        Ok(Self { client, config })
    }

    async fn get_body(&self, operation: &str, params: &[(&str, &str)]) -> CoreResult<String> {
        tracing::debug!(operation, api_url = %self.config.api_url, "위키 API 요청");

        let response = self
            .client
            .get(self.config.api_url.as_str())
            .query(params)
            .send()
            .await
            .map_err(|error| {
                CoreError::Transport(format!("{} HTTP 요청 실패: {}", operation, error))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            CoreError::Transport(format!("{} HTTP 본문 읽기 실패: {}", operation, error))
        })?;

        tracing::debug!(operation, %status, bytes = body.len(), "위키 API 응답 수신");

        if !status.is_success() {
            return Err(CoreError::Transport(format!(
                "{} HTTP 상태 오류: status={}, body={}",
                operation,
                status,
                body_preview(&body)
            )));
        }

        Ok(body)
    }
}

impl TitleSearch for MediaWikiClient {
    async fn search(&self, query: &str, limit: usize) -> CoreResult<SearchResult> {
        let limit = limit.max(1).to_string();
        let body = self
            .get_body(
                "opensearch",
                &[
                    ("action", "opensearch"),
                    ("search", query),
                    ("limit", limit.as_str()),
                    ("format", "json"),
                ],
            )
            .await?;

        parse_opensearch_body(&body)
    }
}

impl ContentSource for MediaWikiClient {
    async fn fetch(&self, title: &str) -> CoreResult<ContentResponse> {
        let body = self
            .get_body(
                "parse",
                &[
                    ("action", "parse"),
                    ("page", title),
                    ("format", "json"),
                    ("redirects", "1"),
                ],
            )
            .await?;

        let content = parse_content_body(&body)?;
        for hop in &content.redirects {
            tracing::debug!(from = %hop.from, to = %hop.to, "리다이렉트 추적");
        }
        Ok(content)
    }
}

/// 오류 메시지에 넣을 응답 본문을 앞부분만 잘라낸다.
pub fn body_preview(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...(총 {} bytes)", &trimmed[..cut], trimmed.len()),
        None => trimmed.to_string(),
    }
}
