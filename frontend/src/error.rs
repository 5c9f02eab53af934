use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that keep a behavior from being wired up.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type BindResult<T = ()> = Result<T, BindError>;
