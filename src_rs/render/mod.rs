// 목적:
// - 문서 렌더링 계층 모듈을 선언한다.
//
// 설명:
// - HTML -> markdown 평탄화만 담당하며 네트워크/상태를 갖지 않는다.
//
// 참조:
// - src_rs/render/markdown.rs

pub mod markdown;
