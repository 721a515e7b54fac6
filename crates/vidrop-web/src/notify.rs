//! How rejections reach the user.
//!
//! The stock page uses a blocking `window.alert`. Embedders with their
//! own toast or dialog system, and the browser tests, plug in a
//! different [`Notifier`].

/// Receives user-facing rejection messages.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Blocking browser alert dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        gloo_dialogs::alert(message);
    }
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message);
    }
}
