//! Resolving the page elements the picker binds to.
//!
//! Only the drop zone and the file input are required. Without either,
//! the page has no picker and [`PickerElements::resolve`] yields
//! `None`. The other elements are optional: the picker skips whatever
//! the page leaves out.

use vidrop_picker::ElementIds;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::error::PickerError;

/// The elements one picker instance reads and writes.
#[derive(Debug, Clone)]
pub struct PickerElements {
    /// `document.body`, which also swallows stray drops.
    pub body: Option<HtmlElement>,
    pub drop_zone: HtmlElement,
    pub file_input: HtmlInputElement,
    pub browse_button: Option<HtmlElement>,
    pub form: Option<HtmlFormElement>,
    pub preview: Option<HtmlElement>,
    pub remove_button: Option<HtmlElement>,
    pub file_name: Option<Element>,
    pub file_size: Option<Element>,
    /// First element in the document carrying the upload-area class.
    pub upload_area: Option<HtmlElement>,
}

impl PickerElements {
    /// Look up every element named in `ids`.
    ///
    /// Returns `Ok(None)` when the drop zone or the file input is
    /// missing. Missing optional elements are logged to the console.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::WrongElementType`] if an id resolves to an
    /// element of the wrong kind (e.g. the file-input id on a `<div>`),
    /// or [`PickerError::JsError`] if the upload-area selector is invalid.
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Option<Self>, PickerError> {
        let Some(drop_zone) = by_id::<HtmlElement>(document, &ids.drop_zone, "HTMLElement")? else {
            return Ok(None);
        };
        let Some(file_input) =
            by_id::<HtmlInputElement>(document, &ids.file_input, "HTMLInputElement")?
        else {
            return Ok(None);
        };

        let upload_area = document
            .query_selector(&format!(".{}", ids.upload_area_class))?
            .map(|el| {
                el.dyn_into::<HtmlElement>()
                    .map_err(|_| PickerError::WrongElementType {
                        id: format!(".{}", ids.upload_area_class),
                        expected: "HTMLElement",
                    })
            })
            .transpose()?;
        if upload_area.is_none() {
            warn_missing(&format!(".{}", ids.upload_area_class));
        }

        Ok(Some(Self {
            body: document.body(),
            drop_zone,
            file_input,
            browse_button: optional(document, &ids.browse_button, "HTMLElement")?,
            form: optional(document, &ids.form, "HTMLFormElement")?,
            preview: optional(document, &ids.preview, "HTMLElement")?,
            remove_button: optional(document, &ids.remove_button, "HTMLElement")?,
            file_name: optional(document, &ids.file_name, "Element")?,
            file_size: optional(document, &ids.file_size, "Element")?,
            upload_area,
        }))
    }

    /// Resolve against the global `window.document`.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::JsError`] when there is no window or
    /// document, plus any error from [`resolve`](Self::resolve).
    pub fn from_window(ids: &ElementIds) -> Result<Option<Self>, PickerError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PickerError::JsError("no global document".into()))?;
        Self::resolve(&document, ids)
    }
}

/// Find an element by id and check its interface.
///
/// An empty id means "not configured" and resolves to `None`.
fn by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<Option<T>, PickerError> {
    if id.is_empty() {
        return Ok(None);
    }
    document
        .get_element_by_id(id)
        .map(|el| {
            el.dyn_into::<T>().map_err(|_| PickerError::WrongElementType {
                id: id.to_owned(),
                expected,
            })
        })
        .transpose()
}

fn optional<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<Option<T>, PickerError> {
    let found = by_id(document, id, expected)?;
    if found.is_none() && !id.is_empty() {
        warn_missing(&format!("#{id}"));
    }
    Ok(found)
}

fn warn_missing(selector: &str) {
    web_sys::console::warn_1(&format!("vidrop: no element matches {selector}, skipping").into());
}
