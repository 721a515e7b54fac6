//! Picker configuration.
//!
//! Every field has a default matching the stock upload page, so an
//! empty JSON object (`{}`) is a valid configuration. Pages with a
//! different markup or policy override only what differs.

use serde::{Deserialize, Serialize};

use crate::validate::UploadPolicy;

/// DOM identifiers the picker binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Region accepting dropped files. Required.
    pub drop_zone: String,
    /// `<input type="file">` holding the selection. Required.
    pub file_input: String,
    /// Button that opens the file dialog.
    pub browse_button: String,
    /// Form wrapping the input.
    pub form: String,
    /// Container shown while a file is selected.
    pub preview: String,
    /// Control that clears the selection.
    pub remove_button: String,
    /// Slot receiving the file name.
    pub file_name: String,
    /// Slot receiving the formatted size.
    pub file_size: String,
    /// Class (not id) of the upload prompt hidden during preview.
    pub upload_area_class: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            drop_zone: "drop-zone".into(),
            file_input: "file-input".into(),
            browse_button: "browse-btn".into(),
            form: "upload-form".into(),
            preview: "file-preview".into(),
            remove_button: "remove-file".into(),
            file_name: "file-name".into(),
            file_size: "file-size".into(),
            upload_area_class: "upload-area".into(),
        }
    }
}

/// Full picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub elements: ElementIds,
    /// Class toggled on the drop zone while a drag hovers over it.
    pub drag_over_class: String,
    pub policy: UploadPolicy,
    /// Submit button caption while the form is submitting.
    pub submitting_label: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            drag_over_class: "drag-over".into(),
            policy: UploadPolicy::default(),
            submitting_label: "Uploading...".into(),
        }
    }
}

/// Invalid picker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("failed to parse picker config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The allow-list is empty, so every file would be rejected.
    #[error("upload policy allows no media types")]
    EmptyAllowList,

    /// The size ceiling is zero, so every non-empty file would be rejected.
    #[error("upload policy max_file_size must be greater than zero")]
    ZeroMaxSize,

    /// A required element id or class name is empty.
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

impl PickerConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error
    /// from [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAllowList`], [`ConfigError::ZeroMaxSize`],
    /// or [`ConfigError::EmptyField`] for a blank required id, class, or
    /// label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.allowed_types.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }
        if self.policy.max_file_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }

        let required = [
            ("elements.drop_zone", &self.elements.drop_zone),
            ("elements.file_input", &self.elements.file_input),
            ("elements.upload_area_class", &self.elements.upload_area_class),
            ("drag_over_class", &self.drag_over_class),
            ("submitting_label", &self.submitting_label),
        ];
        if let Some(&(name, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ConfigError::EmptyField(name));
        }

        Ok(())
    }
}
