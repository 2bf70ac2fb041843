// 목적:
// - MediaWiki API 응답 본문을 도메인 값으로 변환한다.
//
// 설명:
// - opensearch 배열 응답과 parse 객체 응답을 serde_json::Value로 읽어 필요한 필드만 꺼낸다.
// - 형식이 맞지 않으면 전송 계층 오류로 취급한다.
// - parse.text는 formatversion=1의 {"*": html}과 formatversion=2의 문자열을 모두 허용한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/source/mediawiki_http.rs

use serde_json::Value;

use crate::core::errors::{CoreError, CoreResult};
use crate::source::service::{ContentResponse, RedirectHop, SearchResult};

const UNKNOWN_ERROR: &str = "Unknown error";

/// opensearch 응답 `[query, [titles], [descriptions], [urls]]`를 해석한다.
pub fn parse_opensearch_body(body: &str) -> CoreResult<SearchResult> {
    let value: Value = serde_json::from_str(body.trim()).map_err(|error| {
        CoreError::Transport(format!("검색 응답 JSON 파싱 실패: {}, body={}", error, body))
    })?;

    let items = value.as_array().ok_or_else(|| {
        CoreError::Transport(format!("검색 응답이 배열이 아닙니다: body={}", body))
    })?;

    let titles = match items.get(1) {
        Some(titles) => string_list(titles, "titles")?,
        None => {
            return Err(CoreError::Transport(format!(
                "검색 응답에 제목 목록이 없습니다: body={}",
                body
            )))
        }
    };

    let query = items
        .first()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let descriptions = items
        .get(2)
        .map(|value| string_list(value, "descriptions"))
        .transpose()?
        .unwrap_or_default();
    let urls = items
        .get(3)
        .map(|value| string_list(value, "urls"))
        .transpose()?
        .unwrap_or_default();

    Ok(SearchResult {
        query,
        titles,
        descriptions,
        urls,
    })
}

/// parse 응답 객체를 해석한다. 오류 필드와 빈 본문은 그대로 담아 돌려준다.
pub fn parse_content_body(body: &str) -> CoreResult<ContentResponse> {
    let value: Value = serde_json::from_str(body.trim()).map_err(|error| {
        CoreError::Transport(format!("본문 응답 JSON 파싱 실패: {}, body={}", error, body))
    })?;

    if !value.is_object() {
        return Err(CoreError::Transport(format!(
            "본문 응답이 객체가 아닙니다: body={}",
            body
        )));
    }

    if let Some(error) = value.get("error") {
        return Ok(ContentResponse {
            error: Some(error_message(error)),
            ..ContentResponse::default()
        });
    }

    let parse = value.get("parse");
    let title = parse
        .and_then(|parse| parse.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let html = parse
        .and_then(|parse| parse.get("text"))
        .and_then(|text| match text {
            Value::String(html) => Some(html.as_str()),
            Value::Object(_) => text.get("*").and_then(Value::as_str),
            _ => None,
        })
        .map(str::to_string);
    let redirects = parse
        .and_then(|parse| parse.get("redirects"))
        .and_then(Value::as_array)
        .map(|hops| hops.iter().filter_map(redirect_hop).collect())
        .unwrap_or_default();

    Ok(ContentResponse {
        error: None,
        title,
        html,
        redirects,
    })
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(message) if !message.trim().is_empty() => message.clone(),
        Value::Object(_) => error
            .get("info")
            .and_then(Value::as_str)
            .filter(|info| !info.trim().is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string(),
        _ => UNKNOWN_ERROR.to_string(),
    }
}

fn redirect_hop(value: &Value) -> Option<RedirectHop> {
    Some(RedirectHop {
        from: value.get("from")?.as_str()?.to_string(),
        to: value.get("to")?.as_str()?.to_string(),
    })
}

fn string_list(value: &Value, field_name: &str) -> CoreResult<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        CoreError::Transport(format!("검색 응답의 {}가 배열이 아닙니다", field_name))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                CoreError::Transport(format!(
                    "검색 응답의 {}에 문자열이 아닌 값이 있습니다: {}",
                    field_name, item
                ))
            })
        })
        .collect()
}
