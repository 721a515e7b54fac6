//! Page-load entry point for the vidrop picker.
//!
//! This crate compiles to a standalone WASM module for server-rendered
//! upload pages. When the module is instantiated it waits for the DOM,
//! reads an optional JSON configuration from
//!
//! ```html
//! <script type="application/json" id="vidrop-config">{ ... }</script>
//! ```
//!
//! and attaches the picker to the configured elements. Pages without a
//! drop zone or file input are left untouched.
//!
//! The module also re-exports `attachUploadPicker` from `vidrop-web`.
//! Pages loading this module must not call it for the same elements,
//! or every event is handled twice.

use std::cell::RefCell;

use gloo_events::EventListener;
use vidrop_picker::PickerConfig;
use vidrop_web::{Attachment, PickerElements, PickerError, UploadPicker};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use vidrop_web::bindings::*;

/// Id of the inline JSON configuration element.
const CONFIG_ELEMENT_ID: &str = "vidrop-config";

thread_local! {
    /// The page's picker subscriptions, kept for the page lifetime.
    static PAGE_ATTACHMENT: RefCell<Option<Attachment>> = const { RefCell::new(None) };
}

/// Module entry point.
///
/// Called automatically when the WASM module is instantiated.
// Test builds get their entry point from the test harness.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| attach_page()).forget();
    } else {
        attach_page();
    }
}

/// Attach to the global document, logging instead of throwing.
fn attach_page() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    match picker_for(&document) {
        Ok(Some(picker)) => {
            let attachment = picker.attach();
            PAGE_ATTACHMENT.with(|slot| *slot.borrow_mut() = Some(attachment));
        }
        Ok(None) => {
            web_sys::console::debug_1(&"vidrop: no drop zone on this page".into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("vidrop: {e}").into());
        }
    }
}

fn picker_for(document: &Document) -> Result<Option<UploadPicker>, PickerError> {
    let config = page_config(document)?;
    Ok(PickerElements::resolve(document, &config.elements)?
        .map(|elements| UploadPicker::new(elements, config)))
}

/// Read the inline configuration, falling back to the defaults.
fn page_config(document: &Document) -> Result<PickerConfig, PickerError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PickerConfig::default());
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(PickerConfig::default());
    }
    Ok(PickerConfig::from_json(&text)?)
}
