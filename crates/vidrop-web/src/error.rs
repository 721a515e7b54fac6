//! Errors raised while binding the picker to a page.

use vidrop_picker::ConfigError;
use wasm_bindgen::JsValue;

/// Errors that can occur when resolving elements or attaching the picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A browser API call returned an error or a global was missing.
    #[error("browser API error: {0}")]
    JsError(String),

    /// An element exists under the configured id but has the wrong tag.
    #[error("element #{id} is not an {expected}")]
    WrongElementType {
        /// The configured id.
        id: String,
        /// The DOM interface the picker needs.
        expected: &'static str,
    },

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for PickerError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Surface the error to JavaScript callers as a thrown `Error`.
impl From<PickerError> for JsValue {
    fn from(err: PickerError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
