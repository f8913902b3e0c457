#![forbid(unsafe_code)]

//! Validation rules for credential fields.
//!
//! Rules are pure functions from a field's current text to a
//! [`ValidationResult`]. They run only when a field blurs; change events
//! never consult them. A field's rules are composed into a [`Chain`] that
//! evaluates in order and stops at the first failure, so each blur
//! produces at most one error message.

use std::fmt;

// ---------------------------------------------------------------------------
// Error codes (for i18n lookup)
// ---------------------------------------------------------------------------

/// Error code for an empty required field.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for a value missing a required pattern.
pub const ERROR_CODE_PATTERN: &str = "pattern";

/// The symbol set a password must draw at least one character from.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A validation error with a stable code and a display message.
///
/// The `code` identifies the failed rule for programmatic handling and
/// message-catalog lookup; the `message` is the text shown next to the
/// field. Errors are presentation data: they are never returned as `Err`
/// and never escape the owning field's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The outcome of evaluating a rule or rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the result is `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the error if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Returns the error message if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rule trait
// ---------------------------------------------------------------------------

/// A single validation rule over a field's text.
pub trait Rule: Send + Sync {
    /// Validate the given value.
    fn validate(&self, value: &str) -> ValidationResult;
}

// ---------------------------------------------------------------------------
// Built-in rules
// ---------------------------------------------------------------------------

/// Fails on the empty string.
///
/// The check is exact: a value of whitespace only is non-empty and
/// passes. Emptiness here means "the user typed nothing", not "the value
/// is blank after normalization".
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Create a `Required` rule producing the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Rule for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_REQUIRED, &self.message))
        } else {
            ValidationResult::Valid
        }
    }
}

/// Fails unless the value contains the pattern as a substring.
///
/// This is a plain substring test, not a format grammar. An email rule
/// built from `Contains::new("@", ...)` accepts `"@"` alone; that
/// permissiveness is the contract.
#[derive(Debug, Clone)]
pub struct Contains {
    pattern: String,
    message: String,
}

impl Contains {
    /// Create a `Contains` rule for the given pattern and message.
    #[must_use]
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl Rule for Contains {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.contains(&self.pattern) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_PATTERN, &self.message))
        }
    }
}

/// Fails unless the value contains at least one character from a set.
#[derive(Debug, Clone)]
pub struct ContainsAnyOf {
    charset: &'static str,
    message: String,
}

impl ContainsAnyOf {
    /// Create a `ContainsAnyOf` rule over the given character set.
    #[must_use]
    pub fn new(charset: &'static str, message: impl Into<String>) -> Self {
        Self {
            charset,
            message: message.into(),
        }
    }
}

impl Rule for ContainsAnyOf {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.chars().any(|c| self.charset.contains(c)) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_PATTERN, &self.message))
        }
    }
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// An ordered rule chain evaluated first-failure-wins.
pub struct Chain {
    rules: Vec<Box<dyn Rule>>,
}

impl Chain {
    /// Create a chain from the given rules.
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Evaluate the chain against a value.
    ///
    /// Rules run in order; the first `Invalid` result is returned and the
    /// remaining rules are skipped.
    #[must_use]
    pub fn validate(&self, value: &str) -> ValidationResult {
        for rule in &self.rules {
            let result = rule.validate(value);
            if result.is_invalid() {
                return result;
            }
        }
        ValidationResult::Valid
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("rules", &format!("[{} rules]", self.rules.len()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ValidationError --

    #[test]
    fn validation_error_new() {
        let err = ValidationError::new("required", "入力してください");
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "入力してください");
    }

    #[test]
    fn validation_error_display_is_message() {
        let err = ValidationError::new("pattern", "format error");
        assert_eq!(format!("{err}"), "format error");
    }

    // -- ValidationResult --

    #[test]
    fn validation_result_accessors() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(ValidationResult::Valid.error().is_none());

        let invalid = ValidationResult::Invalid(ValidationError::new("required", "msg"));
        assert!(invalid.is_invalid());
        assert_eq!(invalid.error().map(|e| e.code), Some("required"));
        assert_eq!(invalid.error_message(), Some("msg"));
    }

    // -- Required --

    #[test]
    fn required_empty_fails() {
        let rule = Required::new("missing");
        let result = rule.validate("");
        assert!(result.is_invalid());
        assert_eq!(result.error().map(|e| e.code), Some(ERROR_CODE_REQUIRED));
    }

    #[test]
    fn required_whitespace_passes() {
        // Emptiness is exact, not trimmed.
        let rule = Required::new("missing");
        assert!(rule.validate(" ").is_valid());
        assert!(rule.validate("\t").is_valid());
    }

    #[test]
    fn required_non_empty_passes() {
        let rule = Required::new("missing");
        assert!(rule.validate("x").is_valid());
    }

    // -- Contains --

    #[test]
    fn contains_substring_test() {
        let rule = Contains::new("@", "no at sign");
        assert!(rule.validate("a@b").is_valid());
        assert!(rule.validate("@").is_valid());
        assert!(rule.validate("test.example.com").is_invalid());
    }

    #[test]
    fn contains_error_code_is_pattern() {
        let rule = Contains::new("@", "no at sign");
        let result = rule.validate("nope");
        assert_eq!(result.error().map(|e| e.code), Some(ERROR_CODE_PATTERN));
    }

    // -- ContainsAnyOf --

    #[test]
    fn contains_any_of_symbol_membership() {
        let rule = ContainsAnyOf::new(PASSWORD_SYMBOLS, "no symbol");
        assert!(rule.validate("abc!def").is_valid());
        assert!(rule.validate("a{b").is_valid());
        assert!(rule.validate("abc\"def").is_valid());
        assert!(rule.validate("abcdefg").is_invalid());
    }

    #[test]
    fn contains_any_of_each_symbol_counts() {
        let rule = ContainsAnyOf::new(PASSWORD_SYMBOLS, "no symbol");
        for symbol in PASSWORD_SYMBOLS.chars() {
            let value = format!("pw{symbol}");
            assert!(rule.validate(&value).is_valid(), "symbol {symbol:?}");
        }
    }

    #[test]
    fn contains_any_of_rejects_other_punctuation() {
        let rule = ContainsAnyOf::new(PASSWORD_SYMBOLS, "no symbol");
        // '-', '_', ';' and '+' are outside the set.
        assert!(rule.validate("a-b_c;d+e").is_invalid());
    }

    // -- Chain --

    #[test]
    fn chain_first_failure_wins() {
        let chain = Chain::new(vec![
            Box::new(Required::new("first")),
            Box::new(Contains::new("@", "second")),
        ]);
        assert_eq!(chain.validate("").error_message(), Some("first"));
        assert_eq!(chain.validate("abc").error_message(), Some("second"));
        assert!(chain.validate("a@b").is_valid());
    }

    #[test]
    fn empty_chain_is_valid() {
        let chain = Chain::new(Vec::new());
        assert!(chain.validate("").is_valid());
        assert!(chain.validate("anything").is_valid());
    }
}
