//! vidrop-picker: Pure logic behind the video drop picker (sans-IO).
//!
//! Decides whether a dropped or picked file is acceptable, formats its
//! size for display, and tracks which of the two picker views is
//! active:
//!
//! file list -> first file -> validation -> preview | rejection
//!
//! This crate has **no browser dependencies** -- it operates on plain
//! file metadata ([`SelectedFile`]) and returns structured results.
//! All DOM interaction lives in `vidrop-web`.

pub mod config;
pub mod media;
pub mod size;
pub mod state;
pub mod validate;

pub use config::{ConfigError, ElementIds, PickerConfig};
pub use media::MediaType;
pub use size::{MAX_FILE_SIZE, format_file_size};
pub use state::{Picker, PickerState, Selection, SubmitState};
pub use validate::{SelectedFile, UploadPolicy, ValidationError, validate_file};
