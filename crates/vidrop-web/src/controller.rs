//! The picker controller and its event subscriptions.
//!
//! [`UploadPicker`] owns the resolved elements, the configuration and
//! the selection state. [`UploadPicker::attach`] subscribes the DOM
//! listeners and returns an [`Attachment`]; dropping or detaching the
//! attachment unsubscribes every one of them.
//!
//! All handlers run synchronously on the main thread. Shared state sits
//! behind `Rc<RefCell<..>>` and no borrow is held across a DOM call
//! that could dispatch another event.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use vidrop_picker::{
    Picker, PickerConfig, PickerState, SelectedFile, Selection, SubmitState, ValidationError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DragEvent, Element, Event, FileList, HtmlButtonElement};

use crate::dom::{selected_files, set_display};
use crate::elements::PickerElements;
use crate::error::PickerError;
use crate::notify::{AlertNotifier, Notifier};

/// Events whose browser default (opening the dropped file) is suppressed.
const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];
/// Events that turn the drag-over highlight on.
const HIGHLIGHT_EVENTS: [&str; 2] = ["dragenter", "dragover"];
/// Events that turn the drag-over highlight off.
const UNHIGHLIGHT_EVENTS: [&str; 2] = ["dragleave", "drop"];

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

struct Shared {
    elements: PickerElements,
    config: PickerConfig,
    picker: RefCell<Picker>,
    notifier: Box<dyn Notifier>,
}

/// Drag-and-drop video picker bound to one set of page elements.
///
/// Cloning is cheap and yields a handle to the same picker.
#[derive(Clone)]
pub struct UploadPicker {
    shared: Rc<Shared>,
}

impl UploadPicker {
    /// Create a picker that reports rejections with `window.alert`.
    #[must_use]
    pub fn new(elements: PickerElements, config: PickerConfig) -> Self {
        Self::with_notifier(elements, config, AlertNotifier)
    }

    /// Create a picker with a custom rejection notifier.
    #[must_use]
    pub fn with_notifier(
        elements: PickerElements,
        config: PickerConfig,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let picker = Picker::new(config.policy.clone());
        Self {
            shared: Rc::new(Shared {
                elements,
                config,
                picker: RefCell::new(picker),
                notifier: Box::new(notifier),
            }),
        }
    }

    /// Resolve the configured elements in the global document.
    ///
    /// Returns `Ok(None)` when the page has no drop zone or file input.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Config`] for an invalid configuration and
    /// any error from [`PickerElements::from_window`].
    pub fn from_window(config: PickerConfig) -> Result<Option<Self>, PickerError> {
        config.validate()?;
        Ok(PickerElements::from_window(&config.elements)?
            .map(|elements| Self::new(elements, config)))
    }

    #[must_use]
    pub fn elements(&self) -> &PickerElements {
        &self.shared.elements
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.shared.config
    }

    /// Snapshot of the current view state.
    #[must_use]
    pub fn state(&self) -> PickerState {
        self.shared.picker.borrow().state().clone()
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.shared.picker.borrow().submit_state()
    }

    /// Check a file against the policy, alerting the user on rejection.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] that was shown to the user.
    pub fn validate_file(&self, file: &SelectedFile) -> Result<(), ValidationError> {
        let result = {
            let picker = self.shared.picker.borrow();
            vidrop_picker::validate_file(file, picker.policy())
        };
        if let Err(e) = &result {
            self.reject(e);
        }
        result
    }

    /// Take the first file of a browser `FileList`.
    pub fn handle_files(&self, files: &FileList) -> Selection {
        self.handle_selection(selected_files(files))
    }

    /// Take the first of `files`: validate it, then preview or reject.
    ///
    /// Further files are ignored; the user is not told about them.
    pub fn handle_selection(&self, files: Vec<SelectedFile>) -> Selection {
        let selection = self.shared.picker.borrow_mut().handle_files(files);
        match &selection {
            Selection::Empty => {}
            Selection::Rejected(e) => self.reject(e),
            Selection::Accepted { file, ignored } => {
                if *ignored > 0 {
                    web_sys::console::warn_1(
                        &format!("vidrop: {ignored} additional file(s) ignored, using {:?}", file.name)
                            .into(),
                    );
                }
                self.show_file_preview(file);
            }
        }
        selection
    }

    /// Hide the upload prompt and show `file`'s name and size.
    pub fn show_file_preview(&self, file: &SelectedFile) {
        let els = &self.shared.elements;
        if let Some(area) = &els.upload_area {
            set_display(area, "none");
        }
        if let Some(preview) = &els.preview {
            set_display(preview, "block");
        }
        if let Some(slot) = &els.file_name {
            slot.set_text_content(Some(&file.name));
        }
        if let Some(slot) = &els.file_size {
            slot.set_text_content(Some(&file.display_size()));
        }
    }

    /// Clear the selection and bring the upload prompt back.
    pub fn remove_file(&self) {
        self.shared.picker.borrow_mut().remove();

        let els = &self.shared.elements;
        els.file_input.set_value("");
        if let Some(preview) = &els.preview {
            set_display(preview, "none");
        }
        if let Some(area) = &els.upload_area {
            set_display(area, "block");
        }
    }

    /// Mark the form as submitting: disable and relabel its submit button.
    ///
    /// The button is not re-enabled; the submission itself is left to
    /// the browser.
    pub fn begin_submit(&self) {
        self.shared.picker.borrow_mut().begin_submit();

        let Some(form) = &self.shared.elements.form else {
            return;
        };
        let button = match form.query_selector(SUBMIT_BUTTON_SELECTOR) {
            Ok(Some(el)) => el.dyn_into::<HtmlButtonElement>().ok(),
            Ok(None) => None,
            Err(e) => {
                web_sys::console::warn_1(&format!("vidrop: submit lookup failed: {e:?}").into());
                None
            }
        };
        if let Some(button) = button {
            button.set_text_content(Some(&self.shared.config.submitting_label));
            button.set_disabled(true);
        }
    }

    /// Open the native file dialog.
    pub fn open_file_dialog(&self) {
        self.shared.elements.file_input.click();
    }

    /// Subscribe all DOM listeners.
    ///
    /// Each call creates an independent set of subscriptions.
    pub fn attach(&self) -> Attachment {
        let els = &self.shared.elements;
        let prevent = EventListenerOptions::enable_prevent_default();
        let mut listeners = Vec::new();

        // Stop the browser from navigating to a file dropped anywhere
        // on the page, not only on the zone.
        for name in DRAG_EVENTS {
            listeners.push(EventListener::new_with_options(
                &els.drop_zone,
                name,
                prevent,
                suppress_default,
            ));
            if let Some(body) = &els.body {
                listeners.push(EventListener::new_with_options(
                    body,
                    name,
                    prevent,
                    suppress_default,
                ));
            }
        }

        for name in HIGHLIGHT_EVENTS {
            let zone = els.drop_zone.clone();
            let class = self.shared.config.drag_over_class.clone();
            listeners.push(EventListener::new(&els.drop_zone, name, move |_| {
                let _ = zone.class_list().add_1(&class);
            }));
        }
        for name in UNHIGHLIGHT_EVENTS {
            let zone = els.drop_zone.clone();
            let class = self.shared.config.drag_over_class.clone();
            listeners.push(EventListener::new(&els.drop_zone, name, move |_| {
                let _ = zone.class_list().remove_1(&class);
            }));
        }

        let this = self.clone();
        listeners.push(EventListener::new(&els.drop_zone, "drop", move |event| {
            let files = event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|dt| dt.files());
            if let Some(files) = files {
                this.handle_files(&files);
            }
        }));

        let this = self.clone();
        listeners.push(EventListener::new(&els.file_input, "change", move |_| {
            if let Some(files) = this.shared.elements.file_input.files() {
                this.handle_files(&files);
            }
        }));

        if let Some(browse) = &els.browse_button {
            let this = self.clone();
            listeners.push(EventListener::new(browse, "click", move |_| {
                this.open_file_dialog();
            }));
        }

        // Clicking the zone background or the prompt opens the dialog;
        // clicks on other children (the preview, its remove link) do not.
        let this = self.clone();
        listeners.push(EventListener::new(&els.drop_zone, "click", move |event| {
            if this.is_prompt_target(event) {
                this.open_file_dialog();
            }
        }));

        if let Some(remove) = &els.remove_button {
            let this = self.clone();
            listeners.push(EventListener::new_with_options(
                remove,
                "click",
                prevent,
                move |event| {
                    event.prevent_default();
                    this.remove_file();
                },
            ));
        }

        if let Some(form) = &els.form {
            let this = self.clone();
            listeners.push(EventListener::new(form, "submit", move |_| {
                this.begin_submit();
            }));
        }

        web_sys::console::debug_1(
            &format!(
                "vidrop: attached {} listeners to #{}",
                listeners.len(),
                self.shared.config.elements.drop_zone
            )
            .into(),
        );

        Attachment { listeners }
    }

    fn is_prompt_target(&self, event: &Event) -> bool {
        let Some(target) = event.target() else {
            return false;
        };
        let zone: &JsValue = self.shared.elements.drop_zone.as_ref();
        let target_value: &JsValue = target.as_ref();
        target_value == zone
            || target.dyn_ref::<Element>().is_some_and(|el| {
                el.class_list()
                    .contains(&self.shared.config.elements.upload_area_class)
            })
    }

    fn reject(&self, error: &ValidationError) {
        web_sys::console::debug_1(&format!("vidrop: rejected file: {error}").into());
        self.shared.notifier.notify(&error.user_message());
    }
}

fn suppress_default(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

/// Live event subscriptions of one [`UploadPicker::attach`] call.
///
/// Dropping the attachment removes every listener it holds.
#[must_use = "dropping an Attachment detaches its listeners immediately"]
pub struct Attachment {
    listeners: Vec<EventListener>,
}

impl Attachment {
    /// Remove every listener of this attachment.
    pub fn detach(self) {
        drop(self);
    }

    /// Number of live DOM subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
