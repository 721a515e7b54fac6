//! JavaScript entry points.
//!
//! ```js
//! const handle = attachUploadPicker(JSON.stringify({ policy: { max_file_size: 1073741824 } }));
//! // ...
//! handle.detach();
//! ```

use vidrop_picker::PickerConfig;
use wasm_bindgen::prelude::*;

use crate::controller::{Attachment, UploadPicker};
use crate::error::PickerError;

/// A picker attached from JavaScript.
///
/// `attached` is `false` when the page had no drop zone or file input
/// and nothing was bound, or after [`detach`](Self::detach).
#[wasm_bindgen]
pub struct PickerHandle {
    picker: Option<UploadPicker>,
    attachment: Option<Attachment>,
}

#[wasm_bindgen]
impl PickerHandle {
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Name of the previewed file, or `undefined` when idle.
    #[wasm_bindgen(getter, js_name = selectedFileName)]
    #[must_use]
    pub fn selected_file_name(&self) -> Option<String> {
        self.picker
            .as_ref()
            .and_then(|p| match p.state() {
                vidrop_picker::PickerState::Idle => None,
                vidrop_picker::PickerState::Previewing(file) => Some(file.name),
            })
    }

    /// Remove every listener. Calling it again does nothing.
    pub fn detach(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.detach();
        }
    }
}

/// Attach a picker to the current document.
///
/// `config_json` overrides the defaults; omit it for the stock page.
///
/// # Errors
///
/// Throws when the configuration is invalid or an element has the
/// wrong type.
#[wasm_bindgen(js_name = attachUploadPicker)]
pub fn attach_upload_picker(config_json: Option<String>) -> Result<PickerHandle, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => PickerConfig::from_json(json).map_err(PickerError::from)?,
        None => PickerConfig::default(),
    };

    let picker = UploadPicker::from_window(config)?;
    let attachment = picker.as_ref().map(UploadPicker::attach);
    Ok(PickerHandle { picker, attachment })
}

/// Format a byte count the way the preview does (`1536` -> `"1.5 KB"`).
#[wasm_bindgen(js_name = formatFileSize)]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_file_size(bytes: f64) -> String {
    vidrop_picker::format_file_size(bytes as u64)
}
