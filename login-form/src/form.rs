//! The login form: two validated fields gating one submit button.

use std::fmt;

use log::{debug, info, trace};

use crate::config::FormConfig;
use crate::error::ConfigError;
use crate::validation::{ValidationResult, Validatable, Validator, trim_form_whitespace};
use crate::widgets::{Input, SubmitButton, SubmitControl};

/// Field name of the email input.
pub const EMAIL_FIELD: &str = "email";
/// Field name of the password input.
pub const PASSWORD_FIELD: &str = "password";

/// What the host should do with a submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the submission through with these credentials.
    Allow(Credentials),
    /// Suppress the submission; the page must not navigate.
    Block,
}

impl SubmitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }
}

/// Values handed to the submission target.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Trimmed and lowercased.
    pub email: String,
    /// Exactly as typed.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client-side login form validation.
///
/// Owns the validity flags of both fields and keeps the submit control in
/// sync with them: the control is enabled iff both fields passed their last
/// check. The host forwards input events to [`on_email_input`] /
/// [`on_password_input`] and asks [`on_submit_attempt`] before submitting.
///
/// The field and button handles are generic so the rules can run against
/// any UI that implements [`Validatable`] and [`SubmitControl`].
///
/// [`on_email_input`]: Self::on_email_input
/// [`on_password_input`]: Self::on_password_input
/// [`on_submit_attempt`]: Self::on_submit_attempt
pub struct LoginForm<I = Input, B = SubmitButton> {
    email: I,
    password: I,
    submit: B,
    validator: Validator,
    email_valid: bool,
    password_valid: bool,
}

impl LoginForm {
    /// Create a form with fresh headless widgets.
    pub fn new(config: &FormConfig) -> Result<Self, ConfigError> {
        Self::with_handles(Input::new(), Input::new(), SubmitButton::new(), config)
    }

    /// Clear both fields and validate them again, as on first load.
    pub fn reset(&mut self) {
        debug!("resetting login form");
        self.email.clear();
        self.password.clear();
        self.mount();
    }
}

impl<I, B> LoginForm<I, B>
where
    I: Validatable<Value = String> + Clone + 'static,
    B: SubmitControl,
{
    /// Create a form over host-provided handles.
    ///
    /// Nothing is validated until [`mount`](Self::mount).
    pub fn with_handles(
        email: I,
        password: I,
        submit: B,
        config: &FormConfig,
    ) -> Result<Self, ConfigError> {
        let email_pattern = config.email_regex()?;
        let messages = config.messages();

        email.set_error_display(config.error_display);
        password.set_error_display(config.error_display);

        let validator = Validator::new()
            .field(&email, EMAIL_FIELD)
            .trimmed()
            .required(messages.email_required)
            .pattern(email_pattern, messages.email_invalid)
            .field(&password, PASSWORD_FIELD)
            .required(messages.password_required)
            .min_length(config.min_password_length, messages.password_too_short)
            .build();

        Ok(Self {
            email,
            password,
            submit,
            validator,
            email_valid: false,
            password_valid: false,
        })
    }

    /// Run once the host's fields exist.
    ///
    /// Disables submit and validates both (normally empty) fields, so the
    /// "required" errors show before any typing.
    pub fn mount(&mut self) {
        debug!("mounting login form");
        self.submit.set_enabled(false);
        self.validate_email();
        self.validate_password();
    }

    /// Input event on the email field.
    pub fn on_email_input(&mut self) -> ValidationResult {
        self.validate_email()
    }

    /// Input event on the password field.
    pub fn on_password_input(&mut self) -> ValidationResult {
        self.validate_password()
    }

    /// Check the email field, update its presentation and the submit gate.
    pub fn validate_email(&mut self) -> ValidationResult {
        let result = self.validator.validate_field(EMAIL_FIELD);
        self.email_valid = result.is_valid();
        self.update_submit_gate();
        result
    }

    /// Check the password field, update its presentation and the submit gate.
    pub fn validate_password(&mut self) -> ValidationResult {
        let result = self.validator.validate_field(PASSWORD_FIELD);
        self.password_valid = result.is_valid();
        self.update_submit_gate();
        result
    }

    /// Enable submit iff both fields are currently valid.
    pub fn update_submit_gate(&self) {
        let enabled = self.is_valid();
        trace!("submit gate: {}", enabled);
        self.submit.set_enabled(enabled);
    }

    /// Decide whether a submit event may proceed.
    ///
    /// Uses the flags from the last input events, not a fresh check. On a
    /// block, focus moves to the first invalid field.
    pub fn on_submit_attempt(&self) -> SubmitDecision {
        if !self.is_valid() {
            info!(
                "submit blocked (email valid: {}, password valid: {})",
                self.email_valid, self.password_valid
            );
            if !self.email_valid {
                self.email.focus();
            } else {
                self.password.focus();
            }
            return SubmitDecision::Block;
        }

        let credentials = Credentials {
            email: trim_form_whitespace(&self.email.validation_value()).to_lowercase(),
            password: self.password.validation_value(),
        };
        info!("submit allowed for {}", credentials.email);
        SubmitDecision::Allow(credentials)
    }

    /// Both fields passed their last check.
    pub fn is_valid(&self) -> bool {
        self.email_valid && self.password_valid
    }

    pub fn email_valid(&self) -> bool {
        self.email_valid
    }

    pub fn password_valid(&self) -> bool {
        self.password_valid
    }

    /// The email field handle.
    pub fn email(&self) -> &I {
        &self.email
    }

    /// The password field handle.
    pub fn password(&self) -> &I {
        &self.password
    }

    /// The submit control handle.
    pub fn submit_control(&self) -> &B {
        &self.submit
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::config::{Locale, Messages};
    use crate::validation::ErrorDisplay;
    use crate::widgets::FieldState;

    fn english() -> FormConfig {
        FormConfig {
            locale: Locale::En,
            ..Default::default()
        }
    }

    fn mounted() -> LoginForm {
        let mut form = LoginForm::new(&english()).unwrap();
        form.mount();
        form
    }

    fn type_email(form: &mut LoginForm, value: &str) -> ValidationResult {
        form.email().set_value(value);
        form.on_email_input()
    }

    fn type_password(form: &mut LoginForm, value: &str) -> ValidationResult {
        form.password().set_value(value);
        form.on_password_input()
    }

    #[test]
    fn test_nothing_validated_before_mount() {
        let form = LoginForm::new(&english()).unwrap();
        assert_eq!(form.email().state(), FieldState::Untouched);
        assert!(form.submit_control().is_enabled());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_mount_shows_required_errors() {
        let form = mounted();
        let messages = Messages::english();

        assert_eq!(form.email().error(), Some(messages.email_required));
        assert_eq!(form.password().error(), Some(messages.password_required));
        assert_eq!(form.email().state(), FieldState::Invalid);
        assert_eq!(form.password().state(), FieldState::Invalid);
        assert!(!form.submit_control().is_enabled());
    }

    #[test]
    fn test_valid_emails() {
        let mut form = mounted();
        for email in ["a@b.c", "  a@b.c  ", "first.last@mail.example.org", "x+y@d.io"] {
            assert!(type_email(&mut form, email).is_valid(), "{email}");
            assert!(!form.email().has_error());
        }
    }

    #[test]
    fn test_invalid_emails() {
        let mut form = mounted();
        let messages = Messages::english();

        for email in ["not-an-email", "a@b", "@b.c", "a@.c", "a b@c.d", "a@@b.c", "a@b."] {
            let result = type_email(&mut form, email);
            assert_eq!(result.message(), Some(messages.email_invalid.as_str()), "{email}");
        }

        for email in ["", "   "] {
            let result = type_email(&mut form, email);
            assert_eq!(result.message(), Some(messages.email_required.as_str()));
        }
    }

    #[test]
    fn test_email_whitespace_matches_browser() {
        let mut form = mounted();
        let messages = Messages::english();

        assert!(type_email(&mut form, "a\u{85}b@c.d").is_valid());
        assert!(type_email(&mut form, "\u{FEFF}a@b.c\u{FEFF}").is_valid());
        assert_eq!(
            type_email(&mut form, "\u{FEFF}").message(),
            Some(messages.email_required.as_str())
        );
        assert_eq!(
            type_email(&mut form, "\u{85}").message(),
            Some(messages.email_invalid.as_str())
        );
    }

    #[test]
    fn test_password_lengths() {
        let mut form = mounted();
        let messages = Messages::english();

        assert_eq!(
            type_password(&mut form, "").message(),
            Some(messages.password_required.as_str())
        );
        for short in ["a", "ab", "éé"] {
            assert_eq!(
                type_password(&mut form, short).message(),
                Some(messages.password_too_short.as_str())
            );
        }
        assert_eq!(
            type_password(&mut form, "😀").message(),
            Some(messages.password_too_short.as_str())
        );
        for ok in ["abc", "   ", "ééé", "😀😀", "a much longer password"] {
            assert!(type_password(&mut form, ok).is_valid(), "{ok:?}");
        }
    }

    #[test]
    fn test_configured_min_length() {
        let config = FormConfig {
            min_password_length: 8,
            ..english()
        };
        let mut form = LoginForm::new(&config).unwrap();
        form.mount();

        assert!(type_password(&mut form, "abcdefg").is_invalid());
        assert!(type_password(&mut form, "abcdefgh").is_valid());
    }

    #[test]
    fn test_gate_follows_both_flags() {
        let mut form = mounted();

        type_email(&mut form, "a@b.c");
        assert!(!form.submit_control().is_enabled());

        type_password(&mut form, "abc");
        assert!(form.submit_control().is_enabled());

        type_email(&mut form, "a@b");
        assert!(!form.submit_control().is_enabled());
        assert!(form.password_valid());
        assert!(!form.email_valid());
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let mut form = mounted();
        let first = type_email(&mut form, "nope");
        form.email().clear_dirty();
        form.submit_control().clear_dirty();

        let second = form.on_email_input();
        assert_eq!(first, second);
        assert!(!form.email().is_dirty());
        assert!(!form.submit_control().is_dirty());
    }

    #[test]
    fn test_blocked_submit_focuses_first_invalid() {
        let mut form = mounted();
        assert_eq!(form.on_submit_attempt(), SubmitDecision::Block);
        assert!(form.email().take_focus_request());
        assert!(!form.password().take_focus_request());

        type_email(&mut form, "a@b.c");
        assert_eq!(form.on_submit_attempt(), SubmitDecision::Block);
        assert!(form.password().take_focus_request());
    }

    #[test]
    fn test_allowed_submit_normalizes_email() {
        let mut form = mounted();
        type_email(&mut form, "  Someone@Example.NE ");
        type_password(&mut form, " Secret ");

        match form.on_submit_attempt() {
            SubmitDecision::Allow(credentials) => {
                assert_eq!(credentials.email, "someone@example.ne");
                assert_eq!(credentials.password, " Secret ");
            }
            SubmitDecision::Block => panic!("expected submit to be allowed"),
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            email: "a@b.c".into(),
            password: "hunter2".into(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("a@b.c"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_reset() {
        let mut form = mounted();
        type_email(&mut form, "a@b.c");
        type_password(&mut form, "abc");
        assert!(form.is_valid());

        form.reset();
        assert!(form.email().is_empty());
        assert!(form.password().is_empty());
        assert!(!form.is_valid());
        assert!(!form.submit_control().is_enabled());
    }

    #[test]
    fn test_error_display_from_config() {
        let config = FormConfig {
            error_display: ErrorDisplay::None,
            ..english()
        };
        let mut form = LoginForm::new(&config).unwrap();
        form.mount();
        assert!(form.email().has_error());
        assert!(!form.email().error_visible());
    }

    #[test]
    fn test_bad_pattern_is_config_error() {
        let config = FormConfig {
            email_pattern: "(".into(),
            ..english()
        };
        assert!(matches!(
            LoginForm::new(&config),
            Err(ConfigError::EmailPattern { .. })
        ));
    }

    // A host with its own widgets only needs the two capability traits.

    #[derive(Clone, Default)]
    struct FakeField {
        value: Arc<Mutex<String>>,
        error: Arc<Mutex<Option<String>>>,
        focused: Arc<AtomicBool>,
    }

    impl Validatable for FakeField {
        type Value = String;

        fn validation_value(&self) -> String {
            self.value.lock().unwrap().clone()
        }

        fn set_error(&self, msg: impl Into<String>) {
            *self.error.lock().unwrap() = Some(msg.into());
        }

        fn clear_error(&self) {
            *self.error.lock().unwrap() = None;
        }

        fn has_error(&self) -> bool {
            self.error.lock().unwrap().is_some()
        }

        fn error(&self) -> Option<String> {
            self.error.lock().unwrap().clone()
        }

        fn widget_id(&self) -> String {
            "fake".into()
        }

        fn focus(&self) {
            self.focused.store(true, Ordering::SeqCst);
        }

        fn error_display(&self) -> ErrorDisplay {
            ErrorDisplay::Below
        }

        fn set_error_display(&self, _display: ErrorDisplay) {}
    }

    #[derive(Default)]
    struct CountingButton {
        enabled: AtomicBool,
        updates: AtomicUsize,
    }

    impl SubmitControl for CountingButton {
        fn set_enabled(&self, enabled: bool) {
            self.enabled.store(enabled, Ordering::SeqCst);
            self.updates.fetch_add(1, Ordering::SeqCst);
        }

        fn is_enabled(&self) -> bool {
            self.enabled.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_custom_handles() {
        let email = FakeField::default();
        let password = FakeField::default();
        let mut form = LoginForm::with_handles(
            email.clone(),
            password.clone(),
            CountingButton::default(),
            &english(),
        )
        .unwrap();

        form.mount();
        // disable on mount, then one gate update per field
        assert_eq!(form.submit_control().updates.load(Ordering::SeqCst), 3);
        assert!(email.has_error());

        *email.value.lock().unwrap() = "a@b.c".into();
        *password.value.lock().unwrap() = "abc".into();
        form.on_email_input();
        form.on_password_input();

        assert!(form.submit_control().is_enabled());
        assert!(!password.has_error());
        assert!(form.on_submit_attempt().is_allowed());
    }
}
