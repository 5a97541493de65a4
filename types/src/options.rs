//! Resolved conversion options.
//!
//! Raw TOML structs stay private in `recast-config`; the loader resolves them
//! into this type at the parse boundary.

use crate::names::Charset;

/// Pattern used to parse dates when neither the call nor the options name one.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CastOptions {
    date_pattern: Option<String>,
    charset: Charset,
}

impl CastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty patterns are treated as unset.
    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.date_pattern = (!pattern.is_empty()).then_some(pattern);
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// The configured date pattern, or [`DEFAULT_DATE_PATTERN`].
    #[must_use]
    pub fn date_pattern(&self) -> &str {
        self.date_pattern.as_deref().unwrap_or(DEFAULT_DATE_PATTERN)
    }

    #[must_use]
    pub fn charset(&self) -> Charset {
        self.charset
    }
}
