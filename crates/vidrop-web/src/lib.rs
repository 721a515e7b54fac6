//! vidrop-web: Browser binding for the drag-and-drop video picker.
//!
//! Resolves the page elements, subscribes drag/drop, input, click and
//! submit listeners, and renders the preview or the rejection. The
//! decisions themselves come from `vidrop-picker`.
//!
//! All functions in this crate require a browser environment
//! (`wasm32-unknown-unknown` target).

pub mod bindings;
pub mod controller;
pub mod dom;
pub mod elements;
pub mod error;
pub mod notify;

pub use bindings::{PickerHandle, attach_upload_picker};
pub use controller::{Attachment, UploadPicker};
pub use elements::PickerElements;
pub use error::PickerError;
pub use notify::{AlertNotifier, Notifier};
