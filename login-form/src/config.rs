//! Form configuration.
//!
//! Stored as JSON. Every key is optional; missing keys take the defaults
//! below, so an empty object is a valid config.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::ErrorDisplay;

/// One character that is neither `@` nor form whitespace (see
/// [`is_form_whitespace`](crate::validation::is_form_whitespace)).
macro_rules! email_atom {
    () => {
        r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]"
    };
}

/// Default email shape: something, one `@`, something, a dot, something.
pub const DEFAULT_EMAIL_PATTERN: &str = concat!(
    "^",
    email_atom!(),
    "+@",
    email_atom!(),
    r"+\.",
    email_atom!(),
    "+$"
);

/// Default minimum password length, in UTF-16 code units.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 3;

/// Language of the built-in error messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Built-in messages for this locale.
    pub fn messages(self) -> Messages {
        match self {
            Self::Fr => Messages::french(),
            Self::En => Messages::english(),
        }
    }
}

/// Error texts shown under the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub email_required: String,
    pub email_invalid: String,
    pub password_required: String,
    pub password_too_short: String,
}

impl Messages {
    /// French texts.
    ///
    /// `password_too_short` says 8 characters while the default threshold is
    /// 3; see `DESIGN.md` before changing either.
    pub fn french() -> Self {
        Self {
            email_required: "L'email est requis.".into(),
            email_invalid: "Email invalide (ex: nom@domaine.ne).".into(),
            password_required: "Le mot de passe est requis.".into(),
            password_too_short: "8 caractères minimum.".into(),
        }
    }

    /// English texts.
    pub fn english() -> Self {
        Self {
            email_required: "Email is required.".into(),
            email_invalid: "Invalid email (e.g. name@domain.ne).".into(),
            password_required: "Password is required.".into(),
            password_too_short: "Password is too short.".into(),
        }
    }
}

/// Settings for a [`LoginForm`](crate::LoginForm).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Passwords shorter than this (in UTF-16 code units) are rejected.
    pub min_password_length: usize,
    /// Regex an email must match after trimming.
    pub email_pattern: String,
    /// Language of the built-in messages.
    pub locale: Locale,
    /// Overrides the locale's messages when set.
    pub messages: Option<Messages>,
    /// Where the fields render their error text.
    pub error_display: ErrorDisplay,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            locale: Locale::default(),
            messages: None,
            error_display: ErrorDisplay::default(),
        }
    }
}

impl FormConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        debug!("loaded form config from {}", path.display());
        Ok(config)
    }

    /// Load a config, falling back to defaults when the file doesn't exist.
    ///
    /// Any other failure (unreadable file, bad JSON) is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                warn!("no form config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse a config from a JSON string.
    ///
    /// The top level must be an object; serde would otherwise accept an
    /// array as a positional struct.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The messages in effect: explicit overrides, else the locale's.
    pub fn messages(&self) -> Messages {
        self.messages
            .clone()
            .unwrap_or_else(|| self.locale.messages())
    }

    /// Compile the email pattern.
    pub fn email_regex(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.email_pattern).map_err(|source| ConfigError::EmailPattern {
            pattern: self.email_pattern.clone(),
            source,
        })
    }
}
