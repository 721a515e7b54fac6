//! Small DOM helpers shared by the controller.

use vidrop_picker::SelectedFile;
use web_sys::{File, FileList, HtmlElement};

/// Set `style.display`, logging instead of failing.
///
/// Visibility toggles are cosmetic; a failure here must not abort the
/// selection that triggered it.
pub fn set_display(element: &HtmlElement, value: &str) {
    if let Err(e) = element.style().set_property("display", value) {
        web_sys::console::warn_1(&format!("vidrop: failed to set display: {e:?}").into());
    }
}

/// Snapshot the metadata of every file in `list`, in order.
#[must_use]
pub fn selected_files(list: &FileList) -> Vec<SelectedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| describe(&file))
        .collect()
}

/// Metadata of one browser `File`.
#[must_use]
pub fn describe(file: &File) -> SelectedFile {
    SelectedFile::new(file.name(), byte_size(file.size()), file.type_())
}

/// `Blob.size` is a non-negative integer carried in an `f64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte_size(size: f64) -> u64 {
    // Float-to-int `as` saturates and maps NaN to zero.
    size as u64
}
