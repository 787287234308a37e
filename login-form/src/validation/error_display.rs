use serde::{Deserialize, Serialize};

/// Placement of a login field's error text, set from the form config.
///
/// Serialized lowercase: `"below"`, `"inline"`, `"none"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Message block under the field.
    #[default]
    Below,
    /// Message beside the field, for compact layouts.
    Inline,
    /// Invalid styling only; the message region stays hidden.
    None,
}

impl ErrorDisplay {
    /// Whether an error message region is rendered at all.
    pub fn shows_message(self) -> bool {
        !matches!(self, Self::None)
    }
}
