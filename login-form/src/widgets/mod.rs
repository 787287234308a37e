//! Headless form widgets.
//!
//! These hold the state a host UI renders: field values, error text, visual
//! state and the submit button's enabled flag. Clones share state, so the host
//! and the form can each keep a handle.

mod button;
mod input;

pub use button::{SubmitButton, SubmitControl};
pub use input::{FieldState, Input, InputId};
