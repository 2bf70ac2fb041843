use _wiki_knowledge::core::content_fetcher::fetch_content;
use _wiki_knowledge::core::errors::CoreError;
use _wiki_knowledge::core::knowledge_pipeline::resolve_and_render;
use _wiki_knowledge::core::title_resolver::{resolve_title, SEARCH_LIMIT};
use _wiki_knowledge::render::markdown::MarkdownRenderer;
use _wiki_knowledge::source::service::{ContentResponse, RedirectHop};
use rstest::rstest;

use crate::support::{FakeWiki, ACTOR_HTML};

#[tokio::test]
async fn kirk_douglas_renders_actor_link() {
    let wiki = FakeWiki::with_page("Kirk Douglas", ACTOR_HTML);
    let renderer = MarkdownRenderer::default();

    let document = resolve_and_render(&wiki, &wiki, &renderer, "Kirk Douglas")
        .await
        .unwrap();

    assert!(document.contains("[actor](/wiki/Actor"), "{}", document);
    assert!(document.contains("upload.wikimedia.org/kirk.jpg"), "{}", document);
    assert_eq!(wiki.fetch_calls.lock().unwrap().as_slice(), ["Kirk Douglas"]);
}

#[tokio::test]
async fn search_is_limited_to_one_candidate() {
    let wiki = FakeWiki::with_page("Kirk Douglas", ACTOR_HTML);

    let title = resolve_title(&wiki, "kirk douglas").await.unwrap();

    assert_eq!(title, "Kirk Douglas");
    assert_eq!(
        wiki.search_calls.lock().unwrap().as_slice(),
        [("kirk douglas".to_string(), SEARCH_LIMIT)]
    );
    assert_eq!(SEARCH_LIMIT, 1);
}

#[tokio::test]
async fn first_candidate_wins() {
    let wiki = FakeWiki {
        titles: vec!["Medena".to_string(), "Medena (film)".to_string()],
        ..FakeWiki::default()
    };

    assert_eq!(resolve_title(&wiki, "medena").await.unwrap(), "Medena");
}

#[tokio::test]
async fn empty_search_result_stops_before_fetch() {
    let wiki = FakeWiki::default();
    let renderer = MarkdownRenderer::default();

    let error = resolve_and_render(&wiki, &wiki, &renderer, "zzzznonexistentqueryxyz")
        .await
        .unwrap_err();

    match error {
        CoreError::NotFound(message) => assert!(message.contains("zzzznonexistentqueryxyz")),
        other => panic!("NotFound가 아닙니다: {:?}", other),
    }
    assert_eq!(wiki.fetch_count(), 0);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("Kirk  Douglas ")]
#[tokio::test]
async fn query_is_passed_through_unmodified(#[case] query: &str) {
    let wiki = FakeWiki::with_page("Kirk Douglas", ACTOR_HTML);

    let _ = resolve_title(&wiki, query).await;

    assert_eq!(wiki.search_calls.lock().unwrap()[0].0, query);
}

#[tokio::test]
async fn search_transport_failure_propagates_without_fetch() {
    let wiki = FakeWiki {
        search_failure: Some("connection refused".to_string()),
        ..FakeWiki::with_page("Kirk Douglas", ACTOR_HTML)
    };
    let renderer = MarkdownRenderer::default();

    let error = resolve_and_render(&wiki, &wiki, &renderer, "Kirk Douglas")
        .await
        .unwrap_err();

    assert!(matches!(error, CoreError::Transport(ref message) if message == "connection refused"));
    assert_eq!(wiki.fetch_count(), 0);
}

#[tokio::test]
async fn explicit_service_error_is_retrieval_error() {
    let wiki = FakeWiki {
        titles: vec!["Kirk Douglas".to_string()],
        content: ContentResponse {
            error: Some("The page you specified doesn't exist.".to_string()),
            html: Some(String::new()),
            ..ContentResponse::default()
        },
        ..FakeWiki::default()
    };
    let renderer = MarkdownRenderer::default();

    let error = resolve_and_render(&wiki, &wiki, &renderer, "Kirk Douglas")
        .await
        .unwrap_err();

    match error {
        CoreError::Retrieval(message) => {
            assert_eq!(message, "The page you specified doesn't exist.")
        }
        other => panic!("Retrieval이 아닙니다: {:?}", other),
    }
}

#[rstest]
#[case(Some(""))]
#[case(Some("  \n "))]
#[case(None)]
#[tokio::test]
async fn missing_body_is_empty_content_error(#[case] html: Option<&str>) {
    let wiki = FakeWiki {
        titles: vec!["Kirk Douglas".to_string()],
        content: ContentResponse {
            html: html.map(str::to_string),
            ..ContentResponse::default()
        },
        ..FakeWiki::default()
    };
    let renderer = MarkdownRenderer::default();

    let error = resolve_and_render(&wiki, &wiki, &renderer, "Kirk Douglas")
        .await
        .unwrap_err();

    match error {
        CoreError::EmptyContent(message) => assert!(message.contains("Kirk Douglas")),
        other => panic!("EmptyContent가 아닙니다: {:?}", other),
    }
}

#[tokio::test]
async fn fetched_content_keeps_service_title_and_redirects() {
    let wiki = FakeWiki {
        content: ContentResponse {
            title: Some("Kirk Douglas".to_string()),
            html: Some(ACTOR_HTML.to_string()),
            redirects: vec![RedirectHop {
                from: "Issur Danielovitch".to_string(),
                to: "Kirk Douglas".to_string(),
            }],
            ..ContentResponse::default()
        },
        ..FakeWiki::default()
    };

    let parsed = fetch_content(&wiki, "Issur Danielovitch").await.unwrap();

    assert_eq!(parsed.title, "Kirk Douglas");
    assert_eq!(parsed.html, ACTOR_HTML);
    assert_eq!(parsed.redirects.len(), 1);
}

#[tokio::test]
async fn fetched_content_falls_back_to_requested_title() {
    let wiki = FakeWiki {
        content: ContentResponse {
            html: Some("<p>body</p>".to_string()),
            ..ContentResponse::default()
        },
        ..FakeWiki::default()
    };

    let parsed = fetch_content(&wiki, "Medena").await.unwrap();

    assert_eq!(parsed.title, "Medena");
}
