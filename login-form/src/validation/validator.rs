//! Validator builder for fluent validation API.

use log::{debug, warn};
use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;
use super::whitespace::{form_length, trim_form_whitespace};

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;

/// Type alias for value normalization applied before the rules run.
type Normalize<V> = Box<dyn Fn(V) -> V + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    widget_id: String,
    set_error: Box<dyn Fn(Option<String>) + Send + Sync>,
    first_failure: Box<dyn Fn() -> Option<String> + Send + Sync>,
}

impl FieldEntry {
    /// Run the rules, reflect the outcome on the widget and report it.
    fn run(&self) -> ValidationResult {
        match (self.first_failure)() {
            Some(message) => {
                debug!("field '{}' invalid: {}", self.name, message);
                (self.set_error)(Some(message.clone()));
                ValidationResult::Invalid(vec![FieldError {
                    field_name: self.name.clone(),
                    widget_id: self.widget_id.clone(),
                    message,
                }])
            }
            None => {
                debug!("field '{}' valid", self.name);
                (self.set_error)(None);
                ValidationResult::Valid
            }
        }
    }
}

/// Rule set for one or more form fields.
///
/// Built once with [`Validator::field`] and reused for every input event.
/// Each field reports only its first failing rule, so rule order decides
/// which message is shown.
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new()
///     .field(&self.email, "email")
///         .trimmed()
///         .required("Email is required")
///     .build();
///
/// let result = validator.validate_field("email");
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder<W>
    where
        W::Value: 'static,
    {
        FieldBuilder {
            validator: self,
            widget: widget.clone(),
            name: name.into(),
            normalize: None,
            rules: Vec::new(),
        }
    }

    /// Names of the registered fields, in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Validate a single field and update its widget.
    ///
    /// An unregistered name is reported as invalid so it can never open a
    /// submit gate.
    pub fn validate_field(&self, name: &str) -> ValidationResult {
        match self.fields.iter().find(|f| f.name == name) {
            Some(field) => field.run(),
            None => {
                warn!("validation requested for unknown field '{}'", name);
                ValidationResult::Invalid(vec![FieldError {
                    field_name: name.to_string(),
                    widget_id: String::new(),
                    message: format!("unknown field '{}'", name),
                }])
            }
        }
    }

    /// Validate every field in registration order.
    pub fn validate(&self) -> ValidationResult {
        self.fields
            .iter()
            .fold(ValidationResult::Valid, |acc, field| acc.merge(field.run()))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    widget: W,
    name: String,
    normalize: Option<Normalize<W::Value>>,
    rules: Vec<Rule<W::Value>>,
}

impl<W: Validatable + Clone + 'static> FieldBuilder<W>
where
    W::Value: 'static,
{
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<W2: Validatable + Clone + 'static>(
        self,
        widget: &W2,
        name: impl Into<String>,
    ) -> FieldBuilder<W2>
    where
        W2::Value: 'static,
    {
        let validator = self.finalize();
        validator.field(widget, name)
    }

    /// Finalize and return the validator.
    pub fn build(self) -> Validator {
        self.finalize()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let widget_id = self.widget.widget_id();
        let name = self.name;

        let widget_for_rules = self.widget.clone();
        let widget_for_error = self.widget;
        let normalize = self.normalize;
        let rules = self.rules;

        let first_failure: Box<dyn Fn() -> Option<String> + Send + Sync> = Box::new(move || {
            let mut value = widget_for_rules.validation_value();
            if let Some(normalize) = &normalize {
                value = normalize(value);
            }
            rules.iter().find_map(|rule| rule(&value).err())
        });

        let set_error: Box<dyn Fn(Option<String>) + Send + Sync> = Box::new(move |msg| {
            if let Some(msg) = msg {
                widget_for_error.set_error(msg);
            } else {
                widget_for_error.clear_error();
            }
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name,
            widget_id,
            set_error,
            first_failure,
        });

        validator
    }
}

// Built-in rules for String values
impl<W: Validatable<Value = String> + Clone + 'static> FieldBuilder<W> {
    /// Trim surrounding form whitespace before the rules see the value.
    pub fn trimmed(mut self) -> Self {
        self.normalize = Some(Box::new(|v: String| {
            trim_form_whitespace(&v).to_string()
        }));
        self
    }

    /// Require the field to be non-empty.
    ///
    /// Whitespace counts as content unless [`trimmed`](Self::trimmed) is set.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v: &String| !v.is_empty(), msg)
    }

    /// Require minimum length, in UTF-16 code units like a browser's
    /// `value.length`.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &String| form_length(v) >= min, msg)
    }

    /// Require the value to match a compiled regex.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v: &String| re.is_match(v), msg)
    }
}
