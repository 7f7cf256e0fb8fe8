// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{ChanfluxError, Result};

/// Either the value of a successful operation or the error of a failed one.
///
/// The operators never inspect stream elements, so a fallible transform can
/// emit `Maybe<T>` and let the consumer decide what to do with failures.
///
/// # Example
///
/// ```
/// use chanflux_core::{ChanfluxError, Maybe};
///
/// let good = Maybe::value(42);
/// assert_eq!(good.result().ok(), Some(42));
///
/// let bad: Maybe<i32> = Maybe::error(ChanfluxError::stream_error("value not found"));
/// assert!(bad.result().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Maybe<T> {
    /// A successful value
    Value(T),
    /// The error of a failed operation
    Error(ChanfluxError),
}

impl<T> Maybe<T> {
    /// Wraps a successful value.
    pub const fn value(value: T) -> Self {
        Maybe::Value(value)
    }

    /// Wraps an error.
    pub fn error(error: impl Into<ChanfluxError>) -> Self {
        Maybe::Error(error.into())
    }

    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Maybe::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Maybe::Error(_))
    }

    /// Converts from `Maybe<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            Maybe::Value(v) => Some(v),
            Maybe::Error(_) => None,
        }
    }

    /// Converts from `Maybe<T>` to `Option<ChanfluxError>`, discarding values.
    pub fn err(self) -> Option<ChanfluxError> {
        match self {
            Maybe::Value(_) => None,
            Maybe::Error(e) => Some(e),
        }
    }

    /// Maps a `Maybe<T>` to `Maybe<U>` by applying a function to the contained value.
    ///
    /// Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Value(v) => Maybe::Value(f(v)),
            Maybe::Error(e) => Maybe::Error(e),
        }
    }

    /// Chains a fallible step onto a successful value.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Value(v) => f(v),
            Maybe::Error(e) => Maybe::Error(e),
        }
    }

    /// Returns the stored value or the stored error.
    ///
    /// # Errors
    ///
    /// Returns the contained error if this is `Maybe::Error`.
    pub fn result(self) -> Result<T> {
        match self {
            Maybe::Value(v) => Ok(v),
            Maybe::Error(e) => Err(e),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Maybe<T>
where
    E: Into<ChanfluxError>,
{
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(v) => Maybe::Value(v),
            Err(e) => Maybe::Error(e.into()),
        }
    }
}

impl<T> From<Maybe<T>> for Result<T> {
    fn from(item: Maybe<T>) -> Self {
        item.result()
    }
}
