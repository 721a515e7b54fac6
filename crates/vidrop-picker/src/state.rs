//! Selection state of the picker.
//!
//! The picker shows either the upload prompt ([`PickerState::Idle`]) or
//! the preview of one accepted file ([`PickerState::Previewing`]).
//! Only user gestures move between the two: an accepted selection
//! enters the preview, removal leaves it. A rejected selection changes
//! nothing, so an earlier preview survives a bad second drop.

use crate::validate::{SelectedFile, UploadPolicy, ValidationError, validate_file};

/// Which of the two mutually exclusive views is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PickerState {
    /// Upload prompt visible, nothing selected.
    #[default]
    Idle,
    /// Preview visible for the selected file.
    Previewing(SelectedFile),
}

/// Whether the surrounding form has been submitted.
///
/// There is no way back to [`SubmitState::Ready`]: after submission
/// the page navigates away or the server response replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// The form has not been submitted yet.
    #[default]
    Ready,
    /// The form was submitted; the submit button stays disabled.
    Submitting,
}

/// Result of offering a file list to the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The list was empty. Nothing happened.
    Empty,
    /// The first file failed validation. State is unchanged.
    Rejected(ValidationError),
    /// The first file was accepted and is now previewed.
    Accepted {
        /// The previewed file.
        file: SelectedFile,
        /// How many further files in the list were ignored.
        ignored: usize,
    },
}

/// Picker state machine, independent of any DOM.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    policy: UploadPolicy,
    state: PickerState,
    submit: SubmitState,
}

impl Picker {
    /// Create an idle picker enforcing `policy`.
    #[must_use]
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            state: PickerState::Idle,
            submit: SubmitState::Ready,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn state(&self) -> &PickerState {
        &self.state
    }

    #[must_use]
    pub const fn submit_state(&self) -> SubmitState {
        self.submit
    }

    /// The currently previewed file, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        match &self.state {
            PickerState::Idle => None,
            PickerState::Previewing(file) => Some(file),
        }
    }

    /// Offer a dropped or picked file list.
    ///
    /// Only the first file is considered; the rest are counted and
    /// otherwise ignored.
    pub fn handle_files<I>(&mut self, files: I) -> Selection
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let mut files = files.into_iter();
        let Some(first) = files.next() else {
            return Selection::Empty;
        };
        let ignored = files.count();

        if let Err(e) = validate_file(&first, &self.policy) {
            return Selection::Rejected(e);
        }

        self.state = PickerState::Previewing(first.clone());
        Selection::Accepted {
            file: first,
            ignored,
        }
    }

    /// Drop the selection and return to the upload prompt.
    ///
    /// Returns the file that was previewed, if any.
    pub fn remove(&mut self) -> Option<SelectedFile> {
        match std::mem::take(&mut self.state) {
            PickerState::Idle => None,
            PickerState::Previewing(file) => Some(file),
        }
    }

    /// Record a form submission.
    ///
    /// Returns `true` the first time, `false` if already submitting.
    pub fn begin_submit(&mut self) -> bool {
        let first = self.submit == SubmitState::Ready;
        self.submit = SubmitState::Submitting;
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::MAX_FILE_SIZE;

    fn clip(name: &str) -> SelectedFile {
        SelectedFile::new(name, 2048, "video/mp4")
    }

    #[test]
    fn starts_idle_and_ready() {
        let picker = Picker::default();
        assert_eq!(picker.state(), &PickerState::Idle);
        assert_eq!(picker.submit_state(), SubmitState::Ready);
        assert!(picker.selected().is_none());
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let mut picker = Picker::default();
        assert_eq!(picker.handle_files(Vec::new()), Selection::Empty);
        assert_eq!(picker.state(), &PickerState::Idle);
    }

    #[test]
    fn accepted_file_enters_preview() {
        let mut picker = Picker::default();
        let selection = picker.handle_files([clip("a.mp4")]);
        assert_eq!(
            selection,
            Selection::Accepted {
                file: clip("a.mp4"),
                ignored: 0,
            }
        );
        assert_eq!(picker.selected(), Some(&clip("a.mp4")));
    }

    #[test]
    fn only_first_file_is_used() {
        let mut picker = Picker::default();
        let selection = picker.handle_files([clip("a.mp4"), clip("b.mp4"), clip("c.mp4")]);
        assert!(matches!(selection, Selection::Accepted { ignored: 2, .. }));
        assert_eq!(picker.selected().map(|f| f.name.as_str()), Some("a.mp4"));
    }

    #[test]
    fn invalid_first_file_rejects_even_if_later_ones_are_valid() {
        let mut picker = Picker::default();
        let bad = SelectedFile::new("notes.txt", 10, "text/plain");
        let selection = picker.handle_files([bad, clip("good.mp4")]);
        assert!(matches!(selection, Selection::Rejected(_)));
        assert_eq!(picker.state(), &PickerState::Idle);
    }

    #[test]
    fn rejection_keeps_existing_preview() {
        let mut picker = Picker::default();
        picker.handle_files([clip("keep.mp4")]);
        let too_big = SelectedFile::new("big.mp4", MAX_FILE_SIZE + 1, "video/mp4");
        assert!(matches!(
            picker.handle_files([too_big]),
            Selection::Rejected(ValidationError::TooLarge { .. })
        ));
        assert_eq!(picker.selected(), Some(&clip("keep.mp4")));
    }

    #[test]
    fn new_selection_replaces_preview() {
        let mut picker = Picker::default();
        picker.handle_files([clip("first.mp4")]);
        picker.handle_files([clip("second.mp4")]);
        assert_eq!(picker.selected(), Some(&clip("second.mp4")));
    }

    #[test]
    fn remove_returns_to_idle() {
        let mut picker = Picker::default();
        picker.handle_files([clip("a.mp4")]);
        assert_eq!(picker.remove(), Some(clip("a.mp4")));
        assert_eq!(picker.state(), &PickerState::Idle);
        assert_eq!(picker.remove(), None);
    }

    #[test]
    fn submit_is_one_way() {
        let mut picker = Picker::default();
        assert!(picker.begin_submit());
        assert!(!picker.begin_submit());
        assert_eq!(picker.submit_state(), SubmitState::Submitting);
        picker.remove();
        assert_eq!(picker.submit_state(), SubmitState::Submitting);
    }
}
