//! Field validation for login-form.
//!
//! A fluent builder collects the rules for each field once. The resulting
//! [`Validator`] can then be run against a single field on every input event,
//! or against every field at once.
//!
//! # Example
//!
//! ```ignore
//! use login_form::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field(&email, "email")
//!         .trimmed()
//!         .required("Email is required")
//!         .pattern(email_regex, "Invalid email")
//!     .field(&password, "password")
//!         .required("Password is required")
//!         .min_length(3, "Password is too short")
//!     .build();
//!
//! if validator.validate_field("email").is_valid() {
//!     // ...
//! }
//! ```

mod error_display;
mod result;
mod validatable;
mod validator;
mod whitespace;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
pub use whitespace::{form_length, is_form_whitespace, trim_form_whitespace};
