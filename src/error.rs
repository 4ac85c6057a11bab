use wasm_bindgen::JsValue;

/// Reasons a page component could not be set up.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(&'static str),
    #[error("no WebGPU adapter")]
    NoAdapter,
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("request_device error: {0}")]
    Device(String),
    #[error("page torn down")]
    Disposed,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(v: JsValue) -> Self {
        Self::Js(format!("{:?}", v))
    }
}
