//! Validation outcomes and the field-level rules behind them.

use serde::Serialize;

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Structured pass/fail outcome with ordered, human-readable messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub status: bool,
    pub messages: Vec<String>,
}

impl ValidationResult {
    /// Successful outcome carrying a single message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: true,
            messages: vec![message.into()],
        }
    }

    /// Failed outcome carrying every collected message.
    pub fn failure(messages: Vec<String>) -> Self {
        Self {
            status: false,
            messages,
        }
    }

    /// Success when no messages were collected, failure otherwise.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            status: errors.is_empty(),
            messages: errors,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status
    }

    /// Whether any message equals `message`.
    pub fn has_message(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

/// Password length is within the inclusive policy bounds, in characters.
pub fn is_password_length_valid(password: &str) -> bool {
    let length = password.chars().count();
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length)
}

/// Password and its confirmation are identical.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
