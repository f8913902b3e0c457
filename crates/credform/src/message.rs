#![forbid(unsafe_code)]

//! Message catalog for validation errors.
//!
//! Each validation failure is identified by a [`MessageKey`]; the catalog
//! maps keys to display strings. The defaults are the Japanese strings
//! the admin console ships with. Deployments can override individual
//! keys; untouched keys keep their defaults.

use std::collections::HashMap;

/// Identifies one validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Email field left empty.
    EmailRequired,
    /// Email field missing the `@` character.
    EmailMissingAt,
    /// Password field left empty.
    PasswordRequired,
    /// Password field missing a symbol character.
    PasswordMissingSymbol,
}

impl MessageKey {
    /// The built-in default text for this key.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::EmailRequired => "メールアドレスを入力してください",
            Self::EmailMissingAt => "メールアドレスには @ を含めてください",
            Self::PasswordRequired => "パスワードを入力してください",
            Self::PasswordMissingSymbol => "パスワードには記号を含めてください",
        }
    }
}

/// A message catalog with per-key overrides.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<MessageKey, String>,
}

impl Messages {
    /// Create a catalog with the default texts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the text for one key (builder).
    #[must_use]
    pub fn with_text(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }

    /// Resolve the text for a key.
    #[must_use]
    pub fn text(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| key.default_text(), String::as_str)
    }
}
