//! The single failure type produced by every conversion.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A conversion that could not produce a value of the requested shape.
///
/// Carries the name of the source shape, the name of the target shape, an
/// optional human-readable detail and the underlying cause, if any. Built at
/// the failure site and never mutated afterwards.
#[derive(Debug, Error)]
#[error("{from} cannot cast to {to}{}", detail_suffix(.message))]
pub struct CastError {
    from: String,
    to: String,
    message: Option<String>,
    #[source]
    cause: Option<Cause>,
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl CastError {
    pub fn new(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            message: None,
            cause: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Name of the shape the value had before conversion.
    #[must_use]
    pub fn source_shape(&self) -> &str {
        &self.from
    }

    /// Name of the shape the caller asked for.
    #[must_use]
    pub fn target_shape(&self) -> &str {
        &self.to
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }
}
