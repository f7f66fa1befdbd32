//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::context::DEFAULT_MUST_MESSAGE;
use crate::foundation::LengthMode;

/// Configuration for a [`Validator`](crate::Validator).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// use vouch::{LengthMode, ValidatorConfig};
///
/// let config: ValidatorConfig = serde_json::from_str(r#"{"length_mode": "bytes"}"#).unwrap();
/// assert_eq!(config.length_mode, LengthMode::Bytes);
/// assert!(config.builtin_rules);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How the built-in rules measure strings.
    pub length_mode: LengthMode,
    /// Message of a failed `must`.
    pub must_message: String,
    /// Whether the built-in rules are installed on construction.
    pub builtin_rules: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            length_mode: LengthMode::default(),
            must_message: DEFAULT_MUST_MESSAGE.to_owned(),
            builtin_rules: true,
        }
    }
}

impl ValidatorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string length mode.
    #[must_use]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Sets the message used by a failed `must`.
    #[must_use]
    pub fn with_must_message(mut self, message: impl Into<String>) -> Self {
        self.must_message = message.into();
        self
    }

    /// Skips installing the built-in rules.
    #[must_use]
    pub fn without_builtin_rules(mut self) -> Self {
        self.builtin_rules = false;
        self
    }
}
