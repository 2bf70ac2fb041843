// 목적:
// - 외부 위키 서비스 접근 계층 모듈을 선언한다.
//
// 설명:
// - 검색/본문 조회 능력(trait)과 MediaWiki HTTP 구현, 응답 파싱 유틸을 분리한다.
//
// 디자인 패턴:
// - 어댑터(Adapter) + 능력 인터페이스(Capability Interface).
//
// 참조:
// - src_rs/source/service.rs
// - src_rs/source/mediawiki_http.rs
// - src_rs/source/response.rs

pub mod mediawiki_http;
pub mod response;
pub mod service;
