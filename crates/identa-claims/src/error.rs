//! Error types for claim accessors and identity options.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for Results with the crate [`Error`] type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors raised by this crate.
///
/// Lookups that find nothing are not errors: they return `Ok(None)` or
/// `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A required argument was absent or malformed.
    InvalidArgument,
}

/// A structured error naming the offending argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: `{argument}`{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Name of the argument that was rejected.
    pub argument: &'static str,
    /// Optional error message.
    pub message: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind for `argument`.
    pub const fn new(kind: ErrorKind, argument: &'static str) -> Self {
        Self {
            kind,
            argument,
            message: None,
        }
    }

    /// Creates a new invalid argument error.
    pub const fn invalid_argument(argument: &'static str) -> Self {
        Self::new(ErrorKind::InvalidArgument, argument)
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}
