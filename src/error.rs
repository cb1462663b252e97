//! Crate error type

use thiserror::Error;

/// Errors surfaced while configuring or wiring the page
#[derive(Debug, Error)]
pub enum Error {
    /// Embedded site configuration could not be parsed
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser call threw, or a required global was missing
    #[error("dom: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
