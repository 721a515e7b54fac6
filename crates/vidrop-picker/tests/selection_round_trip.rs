//! Integration test: drive the picker through a full user session
//! using a JSON configuration, as the browser binding does.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use vidrop_picker::{
    MAX_FILE_SIZE, Picker, PickerConfig, PickerState, Selection, SelectedFile, SubmitState,
    ValidationError,
};

#[test]
fn select_remove_reselect_submit() {
    let config = PickerConfig::from_json("{}").expect("empty config should be valid");
    let mut picker = Picker::new(config.policy);

    // Wrong type: rejected, still idle.
    let selection = picker.handle_files([SelectedFile::new("slides.pdf", 1024, "application/pdf")]);
    let Selection::Rejected(err) = selection else {
        panic!("expected rejection, got {selection:?}");
    };
    assert_eq!(
        err.user_message(),
        "Invalid file type. Please upload MP4, MOV, AVI, or MKV."
    );
    assert_eq!(picker.state(), &PickerState::Idle);

    // Exactly at the ceiling: accepted.
    let at_limit = SelectedFile::new("holiday.mkv", MAX_FILE_SIZE, "video/x-matroska");
    let selection = picker.handle_files([at_limit.clone()]);
    let Selection::Accepted { file, ignored } = selection else {
        panic!("expected acceptance, got {selection:?}");
    };
    assert_eq!(file.name, "holiday.mkv");
    assert_eq!(file.display_size(), "4 GB");
    assert_eq!(ignored, 0);

    // Remove, then select again: same preview as before.
    assert_eq!(picker.remove(), Some(at_limit.clone()));
    assert_eq!(picker.state(), &PickerState::Idle);
    picker.handle_files([at_limit.clone()]);
    assert_eq!(picker.state(), &PickerState::Previewing(at_limit));

    // Submission sticks.
    assert!(picker.begin_submit());
    assert_eq!(picker.submit_state(), SubmitState::Submitting);
}

#[test]
fn custom_policy_from_json() {
    let config = PickerConfig::from_json(
        r#"{"policy": {"allowed_types": ["video/webm"], "max_file_size": 1048576}}"#,
    )
    .unwrap();
    let mut picker = Picker::new(config.policy);

    let selection = picker.handle_files([SelectedFile::new("a.mp4", 10, "video/mp4")]);
    assert!(matches!(
        selection,
        Selection::Rejected(ValidationError::UnsupportedType { .. })
    ));

    let selection = picker.handle_files([SelectedFile::new("a.webm", 1_048_577, "video/webm")]);
    let Selection::Rejected(err) = selection else {
        panic!("expected rejection, got {selection:?}");
    };
    assert_eq!(
        err.user_message(),
        "File is too large. Maximum size is 1MB."
    );

    assert!(matches!(
        picker.handle_files([SelectedFile::new("a.webm", 1_048_576, "video/webm")]),
        Selection::Accepted { .. }
    ));
}
