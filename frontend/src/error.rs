use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),
    #[error("site content has no {0}")]
    EmptyContent(&'static str),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(format!("{:?}", value))
    }
}
