use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{ErrorDisplay, Validatable};

/// Unique identifier for an Input widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Visual state of a field.
///
/// Once validation has run the field is always `Valid` or `Invalid`;
/// `Untouched` is never re-entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not validated yet, no styling.
    #[default]
    Untouched,
    /// Error text shown, invalid styling.
    Invalid,
    /// No error text, valid styling.
    Valid,
}

/// Internal state for an Input widget
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value
    value: String,
    /// Validation error message (if any)
    error: Option<String>,
    /// Current visual state
    state: FieldState,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// A text input with shared state.
///
/// `Input` holds a field's value and its validation presentation. Changing
/// the value never touches the error; the form re-validates on the input
/// event and decides.
#[derive(Debug)]
pub struct Input {
    /// Unique identifier for this input instance
    id: InputId,
    /// Internal state
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Focus request flag (checked by the host)
    focus_requested: Arc<AtomicBool>,
}

impl Input {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::from_inner(InputInner::default())
    }

    /// Create an input with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self::from_inner(InputInner {
            value: value.into(),
            ..Default::default()
        })
    }

    fn from_inner(inner: InputInner) -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this input
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Get the ID as a string
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the current visual state
    pub fn state(&self) -> FieldState {
        self.inner
            .read()
            .map(|guard| guard.state)
            .unwrap_or_default()
    }

    /// Whether the error message region should be shown.
    pub fn error_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some() && guard.error_display.shows_message())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            let value = value.into();
            if guard.value != value {
                guard.value = value;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Clear the input value
    pub fn clear(&self) {
        self.set_value(String::new());
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Request focus for this input
    pub fn focus(&self) {
        self.focus_requested.store(true, Ordering::SeqCst);
    }

    /// Check and clear the focus request (called by the host)
    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Show a validation error and switch to the invalid state.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            let msg = msg.into();
            let unchanged =
                guard.state == FieldState::Invalid && guard.error.as_deref() == Some(msg.as_str());
            if !unchanged {
                guard.error = Some(msg);
                guard.state = FieldState::Invalid;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Hide the validation error and switch to the valid state.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.state != FieldState::Valid
        {
            guard.error = None;
            guard.state = FieldState::Valid;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if this input has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error_display != display
        {
            guard.error_display = display;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }
}

impl Clone for Input {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            focus_requested: Arc::clone(&self.focus_requested),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

impl Validatable for Input {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        Input::set_error(self, msg)
    }

    fn clear_error(&self) {
        Input::clear_error(self)
    }

    fn has_error(&self) -> bool {
        Input::has_error(self)
    }

    fn error(&self) -> Option<String> {
        Input::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn focus(&self) {
        Input::focus(self)
    }

    fn error_display(&self) -> ErrorDisplay {
        Input::error_display(self)
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        Input::set_error_display(self, display)
    }
}
