// 목적:
// - Python에서 호출 가능한 지식 조회 브릿지 클래스를 제공한다.
//
// 설명:
// - 질의 문자열 하나를 받아 markdown 문자열 하나를 반환한다.
// - 오류 종류별로 별도의 예외 클래스를 올려 호스트가 실패 원인을 구분할 수 있게 한다.
// - 파이프라인이 도는 동안 GIL을 풀어 동시 호출을 막지 않는다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/api/blocking.rs

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::api::blocking::{parse_config, resolve_and_render_with};
use crate::core::errors::CoreError;
use crate::core::knowledge_pipeline::KnowledgeConfigPayload;

create_exception!(_wiki_knowledge, KnowledgeError, PyException);
create_exception!(_wiki_knowledge, TransportError, KnowledgeError);
create_exception!(_wiki_knowledge, NotFoundError, KnowledgeError);
create_exception!(_wiki_knowledge, RetrievalError, KnowledgeError);
create_exception!(_wiki_knowledge, EmptyContentError, KnowledgeError);

/// Python에 노출되는 지식 조회 브릿지 클래스다.
#[pyclass(name = "KnowledgeBridge")]
pub struct PyKnowledgeBridge {
    config: KnowledgeConfigPayload,
}

#[pymethods]
impl PyKnowledgeBridge {
    /// 설정 JSON(선택)으로 브릿지 객체를 생성한다.
    #[new]
    #[pyo3(signature = (config_json=None))]
    pub fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = parse_config(config_json).map_err(to_py_error)?;
        Ok(Self { config })
    }

    /// 현재 설정을 JSON으로 반환한다.
    pub fn status(&self) -> PyResult<String> {
        serde_json::to_string(&self.config)
            .map_err(|error| PyRuntimeError::new_err(format!("설정 직렬화 실패: {}", error)))
    }

    /// 질의를 위키 문서로 해석해 markdown을 반환한다.
    pub fn search_knowledge(&self, py: Python<'_>, query: &str) -> PyResult<String> {
        let config = self.config.clone();
        let query = query.to_string();
        py.detach(move || resolve_and_render_with(&config, &query))
            .map_err(to_py_error)
    }
}

pub fn to_py_error(error: CoreError) -> PyErr {
    let message = error.to_string();
    match error {
        CoreError::Transport(_) => TransportError::new_err(message),
        CoreError::NotFound(_) => NotFoundError::new_err(message),
        CoreError::Retrieval(_) => RetrievalError::new_err(message),
        CoreError::EmptyContent(_) => EmptyContentError::new_err(message),
        CoreError::InvalidConfig(_) => PyValueError::new_err(message),
        CoreError::Runtime(_) => PyRuntimeError::new_err(message),
    }
}

/// 브릿지 클래스와 예외 클래스를 모듈에 등록한다.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<PyKnowledgeBridge>()?;
    m.add("KnowledgeError", py.get_type::<KnowledgeError>())?;
    m.add("TransportError", py.get_type::<TransportError>())?;
    m.add("NotFoundError", py.get_type::<NotFoundError>())?;
    m.add("RetrievalError", py.get_type::<RetrievalError>())?;
    m.add("EmptyContentError", py.get_type::<EmptyContentError>())?;
    Ok(())
}
