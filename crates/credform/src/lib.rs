#![forbid(unsafe_code)]

//! Credential form state machine with blur-triggered validation.
//!
//! This crate models a login form as plain data plus three kinds of
//! synchronous events, with no UI-framework or terminal dependencies:
//!
//! - **Change** events replace a field's value and never touch its error
//!   text.
//! - **Blur** events re-run the field's validation rule chain against the
//!   current value and update the error text, and nothing else.
//! - **Submit** forwards the raw current values to a [`CredentialSink`]
//!   collaborator, unconditionally — validation state is presentation
//!   only and never gates submission.
//!
//! The host (a widget, a screen, a test) reads per-field snapshots of
//! `(value, error)` and decides how to draw them; when `error` is
//! non-empty the snapshot's `alert` flag is set so assistive output can
//! announce it.
//!
//! # Example
//!
//! ```rust
//! use credform::{Credentials, CredentialSink, FieldId, LoginForm};
//!
//! struct Recorder(Vec<Credentials>);
//! impl CredentialSink for Recorder {
//!     fn submit(&mut self, credentials: Credentials) {
//!         self.0.push(credentials);
//!     }
//! }
//!
//! let mut form = LoginForm::new();
//! form.change(FieldId::Email, "admin@example.com");
//! form.blur(FieldId::Email);
//! assert!(!form.field(FieldId::Email).alert);
//!
//! let mut sink = Recorder(Vec::new());
//! form.submit(&mut sink);
//! assert_eq!(sink.0[0].email, "admin@example.com");
//! ```

pub mod field;
pub mod form;
pub mod message;
pub mod rules;

pub use field::{FieldId, FieldSnapshot, FieldState};
pub use form::{CredentialSink, Credentials, FormEvent, LoginForm};
pub use message::{MessageKey, Messages};
pub use rules::{
    Chain, Contains, ContainsAnyOf, Required, Rule, ValidationError, ValidationResult,
    ERROR_CODE_PATTERN, ERROR_CODE_REQUIRED, PASSWORD_SYMBOLS,
};
