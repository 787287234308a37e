use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capability to enable or disable a form's submit control.
pub trait SubmitControl: Send + Sync {
    /// Enable or disable the control.
    fn set_enabled(&self, enabled: bool);

    /// Whether the control currently accepts activation.
    fn is_enabled(&self) -> bool;
}

/// Submit button state.
///
/// Starts enabled, like a freshly parsed page; the form disables it when it
/// mounts.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    enabled: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl SubmitButton {
    /// Create a new, enabled button.
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if the button state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitControl for SubmitButton {
    fn set_enabled(&self, enabled: bool) {
        if self.enabled.swap(enabled, Ordering::SeqCst) != enabled {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_marks_dirty_only_on_change() {
        let button = SubmitButton::new();
        assert!(button.is_enabled());

        button.set_enabled(true);
        assert!(!button.is_dirty());

        button.set_enabled(false);
        assert!(!button.is_enabled());
        assert!(button.is_dirty());

        button.clear_dirty();
        button.set_enabled(false);
        assert!(!button.is_dirty());
    }

    #[test]
    fn test_clones_share_state() {
        let button = SubmitButton::new();
        let host = button.clone();
        button.set_enabled(false);
        assert!(!host.is_enabled());
    }
}
