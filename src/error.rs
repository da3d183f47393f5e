//! This module implements the error type used throughout the crate.

use core::fmt;
use std::borrow::Cow;

/// The kind of error raised by an operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A value was outside the range the civil-time facility can represent.
    Range,
    /// A time-zone string or offset could not be resolved to a zone.
    InvalidTimeZone,
    /// Any other error surfaced by the host system.
    #[default]
    Generic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => f.write_str("RangeError"),
            Self::InvalidTimeZone => f.write_str("InvalidTimeZone"),
            Self::Generic => f.write_str("Error"),
        }
    }
}

/// The error type for Jalali date/time operations.
///
/// Calendar conversion itself never fails; errors come from the
/// civil-time layer (unrepresentable instants, system clock access)
/// or from time-zone resolution at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JalaliError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl JalaliError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(""),
        }
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an invalid time-zone error.
    #[inline]
    #[must_use]
    pub const fn invalid_time_zone() -> Self {
        Self::new(ErrorKind::InvalidTimeZone)
    }

    /// Creates a generic error with the provided message.
    #[inline]
    #[must_use]
    pub const fn general(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            message: Cow::Borrowed(message),
        }
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for JalaliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for JalaliError {}

impl From<jiff::Error> for JalaliError {
    fn from(err: jiff::Error) -> Self {
        Self::range().with_message(format!("{err}"))
    }
}
