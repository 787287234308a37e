//! The field side of the login form.

use super::ErrorDisplay;

/// A login field as the host UI exposes it.
///
/// The form reads the field's current text through this and flips it between
/// "error text shown, invalid style" and "no text, valid style". Hosts back
/// it with whatever they render: the headless [`Input`](crate::widgets::Input),
/// a DOM node through wasm bindings, or a test fake.
pub trait Validatable: Send + Sync {
    /// What the rules check, usually the raw text.
    type Value;

    /// Current contents, untouched; trimming is the rules' business.
    fn validation_value(&self) -> Self::Value;

    /// Show `msg` under the field and style it invalid.
    fn set_error(&self, msg: impl Into<String>);

    /// Hide the message and style the field valid.
    fn clear_error(&self);

    fn has_error(&self) -> bool;

    /// Message currently shown, if the field is invalid.
    fn error(&self) -> Option<String>;

    /// Stable id reported in [`FieldError`](super::FieldError)s.
    fn widget_id(&self) -> String;

    /// Move the caret here, e.g. after a blocked submit.
    fn focus(&self);

    fn error_display(&self) -> ErrorDisplay;

    /// Applied once from [`FormConfig`](crate::FormConfig) when the form is built.
    fn set_error_display(&self, display: ErrorDisplay);
}
