use thiserror::Error;

/// Failures while bringing up or feeding a ripple surface.
///
/// None of these reach the page: the registry logs them and leaves the
/// affected canvas blank.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("no window/document available")]
    NoDocument,
    #[error("WebGL context unavailable")]
    ContextUnavailable,
    #[error("failed to create {0}")]
    Create(&'static str),
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("shader program failed to link: {0}")]
    ProgramLink(String),
    #[error("canvas has no {0} attribute")]
    MissingSource(&'static str),
    #[error("image {url} failed to load")]
    ImageLoad { url: String },
    #[error("texture upload failed: {0}")]
    TextureUpload(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl FxError {
    /// Wrap a JS exception, keeping its debug rendering for the log.
    pub fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", err))
    }
}
