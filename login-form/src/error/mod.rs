//! Error types
//!
//! Validation failures are not errors; they live in
//! [`ValidationResult`](crate::validation::ValidationResult). These cover
//! what can actually go wrong around the form: loading its configuration
//! and setting up logging.

mod config;
mod logging;

pub use config::*;
pub use logging::*;
