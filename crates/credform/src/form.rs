#![forbid(unsafe_code)]

//! The login form controller.
//!
//! [`LoginForm`] owns the two field states and their rule chains, routes
//! change and blur events by [`FieldId`], and forwards submissions to a
//! [`CredentialSink`]. Submission is deliberately ungated: the current
//! raw values go to the sink even while one or both fields show
//! validation errors, including when both are empty. Validation text is
//! feedback for the person typing, not an admission check.

use crate::field::{FieldId, FieldSnapshot, FieldState};
use crate::message::Messages;
use crate::rules::Chain;

/// The raw values handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Email field text at submit time.
    pub email: String,
    /// Password field text at submit time.
    pub password: String,
}

/// The external submission collaborator.
///
/// Implementations own everything past the hand-off: transport, retry,
/// and any loading/success/failure presentation. The form never awaits,
/// tracks, or cancels a submission.
pub trait CredentialSink {
    /// Receive one submission.
    fn submit(&mut self, credentials: Credentials);
}

/// A form event delivered as a plain message.
///
/// Hosts that prefer message dispatch over direct method calls build
/// these from their own input events and hand them to
/// [`LoginForm::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's text was replaced.
    Change(FieldId, String),
    /// A field lost focus.
    Blur(FieldId),
    /// The form was submitted.
    Submit,
}

/// State and behavior of the admin login form.
pub struct LoginForm {
    email: FieldState,
    password: FieldState,
    email_rules: Chain,
    password_rules: Chain,
    email_touched: bool,
    password_touched: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    /// Create a form with the default message catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_messages(&Messages::new())
    }

    /// Create a form with a custom message catalog.
    #[must_use]
    pub fn with_messages(messages: &Messages) -> Self {
        Self {
            email: FieldState::new(),
            password: FieldState::new(),
            email_rules: FieldId::Email.rules(messages),
            password_rules: FieldId::Password.rules(messages),
            email_touched: false,
            password_touched: false,
        }
    }

    /// Apply a change event: replace the field's text.
    ///
    /// Never evaluates rules and never touches the field's error text.
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) {
        self.state_mut(field).set_value(value);
    }

    /// Apply a blur event: re-validate the field and mark it touched.
    pub fn blur(&mut self, field: FieldId) {
        match field {
            FieldId::Email => {
                self.email.blur(&self.email_rules);
                self.email_touched = true;
            }
            FieldId::Password => {
                self.password.blur(&self.password_rules);
                self.password_touched = true;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = field.label(),
            alert = self.state(field).has_error(),
            "field blurred"
        );
    }

    /// The raw current values.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        }
    }

    /// Submit the form: forward the raw current values to the sink.
    ///
    /// Unconditional by contract — error state is not consulted.
    pub fn submit(&self, sink: &mut dyn CredentialSink) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            email_alert = self.email.has_error(),
            password_alert = self.password.has_error(),
            "submitting credentials"
        );
        sink.submit(self.credentials());
    }

    /// Dispatch a message-style event. Returns `true` if form state changed.
    pub fn handle(&mut self, event: FormEvent, sink: &mut dyn CredentialSink) -> bool {
        match event {
            FormEvent::Change(field, value) => {
                self.change(field, value);
                true
            }
            FormEvent::Blur(field) => {
                self.blur(field);
                true
            }
            FormEvent::Submit => {
                self.submit(sink);
                false
            }
        }
    }

    /// Snapshot of one field for the rendering host.
    #[must_use]
    pub fn field(&self, field: FieldId) -> FieldSnapshot<'_> {
        self.state(field).snapshot()
    }

    /// Whether the field has blurred at least once.
    #[must_use]
    pub fn is_touched(&self, field: FieldId) -> bool {
        match field {
            FieldId::Email => self.email_touched,
            FieldId::Password => self.password_touched,
        }
    }

    /// Whether any field has blurred at least once.
    #[must_use]
    pub fn any_touched(&self) -> bool {
        self.email_touched || self.password_touched
    }

    /// Clear the touched flags.
    pub fn reset_touched(&mut self) {
        self.email_touched = false;
        self.password_touched = false;
    }

    fn state(&self, field: FieldId) -> &FieldState {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    fn state_mut(&mut self, field: FieldId) -> &mut FieldState {
        match field {
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }
}
