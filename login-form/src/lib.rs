//! Client-side login form validation
//!
//! Headless validation and submit gating for an email + password form. A
//! host UI owns rendering and forwards input and submit events; this crate
//! decides which errors to show and whether the submit control is enabled.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod validation;
pub mod widgets;

mod form;

pub use config::FormConfig;
pub use form::*;

pub mod prelude {
    pub use crate::config::{FormConfig, Locale, Messages};
    pub use crate::error::{ConfigError, LoggingError};
    pub use crate::form::{Credentials, LoginForm, SubmitDecision};
    pub use crate::validation::{ErrorDisplay, FieldError, Validatable, ValidationResult};
    pub use crate::widgets::{FieldState, Input, SubmitButton, SubmitControl};
}
