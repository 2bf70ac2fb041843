// 목적:
// - 문서 HTML을 선형 markdown 텍스트로 변환한다.
//
// 설명:
// - 실제 변환은 fast_html2md(html2md) 재작성기에 맡기고, 여기서는 옵션 매핑만 한다.
// - base_url이 있으면 상대 링크/이미지 경로를 절대 경로로 바꾸는 진입점을 사용한다.
// - script/style 등 본문이 아닌 태그는 항상 제거 목록에 넣는다.
// - 같은 입력은 항상 같은 출력을 만든다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/core/knowledge_pipeline.rs

use std::collections::HashSet;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};

const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub ignore_images: bool,
    /// 설정되면 상대 링크/이미지 경로를 이 주소 기준의 절대 경로로 바꾼다.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    ignored_tags: HashSet<String>,
    base_url: Option<Url>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            ignored_tags: ignored_tags(false),
            base_url: None,
        }
    }
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> CoreResult<Self> {
        let base_url = match options.base_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(Url::parse(raw).map_err(|error| {
                CoreError::InvalidConfig(format!(
                    "render.base_url을 해석할 수 없습니다: {}, value={}",
                    error, raw
                ))
            })?),
            _ => None,
        };

        Ok(Self {
            ignored_tags: ignored_tags(options.ignore_images),
            base_url,
        })
    }

    /// HTML을 markdown으로 변환한다. 문서 앞뒤 공백만 정리하고 끝에 줄바꿈 하나를 붙인다.
    pub fn render(&self, html: &str) -> String {
        let ignored = Some(self.ignored_tags.clone());
        let markdown = html2md::rewrite_html_custom_with_url(html, &ignored, false, &self.base_url);

        let trimmed = markdown.trim_matches(|ch: char| ch == '\n' || ch == '\r' || ch == ' ');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}\n", trimmed)
        }
    }
}

/// 기본 옵션으로 HTML을 markdown으로 변환한다.
pub fn render(html: &str) -> String {
    MarkdownRenderer::default().render(html)
}

fn ignored_tags(ignore_images: bool) -> HashSet<String> {
    let mut tags = NON_CONTENT_TAGS
        .iter()
        .map(|tag| tag.to_string())
        .collect::<HashSet<_>>();
    if ignore_images {
        tags.insert("img".to_string());
    }
    tags
}
