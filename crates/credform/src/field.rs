#![forbid(unsafe_code)]

//! Per-field state for the credential form.
//!
//! A field holds exactly two strings: the current text and the current
//! error message (empty string = no visible error). Change events touch
//! only the text; blur events touch only the error. The error therefore
//! describes the value as it was at the most recent blur, and stays
//! stale through later edits until the field blurs again.

use crate::message::{MessageKey, Messages};
use crate::rules::{Chain, Contains, ContainsAnyOf, Required, PASSWORD_SYMBOLS};

/// Identity of a credential form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// The email address field.
    Email,
    /// The password field.
    Password,
}

impl FieldId {
    /// Display label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "メールアドレス",
            Self::Password => "パスワード",
        }
    }

    /// Build this field's validation rule chain from a message catalog.
    ///
    /// Rule order is part of the contract: emptiness is checked before
    /// the pattern test, so an empty field reports the "please enter"
    /// message and never the pattern message.
    #[must_use]
    pub fn rules(self, messages: &Messages) -> Chain {
        match self {
            Self::Email => Chain::new(vec![
                Box::new(Required::new(messages.text(MessageKey::EmailRequired))),
                Box::new(Contains::new(
                    "@",
                    messages.text(MessageKey::EmailMissingAt),
                )),
            ]),
            Self::Password => Chain::new(vec![
                Box::new(Required::new(messages.text(MessageKey::PasswordRequired))),
                Box::new(ContainsAnyOf::new(
                    PASSWORD_SYMBOLS,
                    messages.text(MessageKey::PasswordMissingSymbol),
                )),
            ]),
        }
    }
}

/// Mutable state of one field: current text plus current error text.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: String,
    error: String,
}

impl FieldState {
    /// Create an empty field with no error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The current error message (empty = no visible error).
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether an error message is currently visible.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Apply a change event: replace the text, leave the error alone.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Apply a blur event: re-run the rule chain, replace the error.
    pub fn blur(&mut self, rules: &Chain) {
        self.error = rules
            .validate(&self.value)
            .error_message()
            .unwrap_or_default()
            .to_string();
    }

    /// Snapshot for the host rendering surface.
    #[must_use]
    pub fn snapshot(&self) -> FieldSnapshot<'_> {
        FieldSnapshot {
            value: &self.value,
            error: &self.error,
            alert: self.has_error(),
        }
    }
}

/// Read-only view of a field handed to the rendering host.
///
/// `alert` is `true` exactly when `error` is non-empty; hosts with
/// assistive output should announce the error text when it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSnapshot<'a> {
    /// Current text.
    pub value: &'a str,
    /// Current error message (empty = none).
    pub error: &'a str,
    /// Whether the error should be announced.
    pub alert: bool,
}
