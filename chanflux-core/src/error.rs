// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for chanflux stream operators.
//!
//! The operators themselves have no error channel: exhaustion and cancellation
//! are ordinary terminations. [`ChanfluxError`] covers the remaining failure
//! modes, such as panicking tasks inside a [`TaskGroup`](crate::TaskGroup) or
//! errors carried through a stream as [`Maybe`](crate::Maybe) values.
//!
//! # Examples
//!
//! ```
//! use chanflux_core::{ChanfluxError, Result};
//!
//! fn process_data() -> Result<()> {
//!     Err(ChanfluxError::stream_error("Stream not ready"))
//! }
//!
//! assert!(process_data().is_err());
//! ```

/// Root error type for all chanflux operations.
#[derive(Debug, thiserror::Error)]
pub enum ChanfluxError {
    /// Stream processing encountered an error
    ///
    /// This is a general error for stream operations that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided transform functions.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// One or more tasks of a task group panicked.
    ///
    /// Panicking tasks still count as finished, so the group stays joinable.
    #[error("{count} task(s) panicked")]
    TaskPanicked {
        /// Number of tasks that panicked
        count: usize,
    },

    /// A cancellation token fired before the operation completed.
    #[error("Operation cancelled")]
    Cancelled,
}

impl ChanfluxError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if this error reports a fired cancellation token.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Cancellation is a deliberate early exit and is not considered permanent.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        !self.is_cancelled()
    }
}

/// Specialized Result type for chanflux operations
///
/// # Examples
///
/// ```
/// use chanflux_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = core::result::Result<T, ChanfluxError>;

/// Extension trait for converting errors into `ChanfluxError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoChanfluxError {
    /// Convert this error into a `ChanfluxError` with additional context
    fn into_chanflux_error(self, context: &str) -> ChanfluxError;

    /// Convert this error into a `ChanfluxError` without additional context
    fn into_chanflux(self) -> ChanfluxError
    where
        Self: Sized,
    {
        self.into_chanflux_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoChanfluxError for E {
    fn into_chanflux_error(self, context: &str) -> ChanfluxError {
        if context.is_empty() {
            ChanfluxError::user_error(self)
        } else {
            ChanfluxError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(ChanfluxError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(ChanfluxError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for core::result::Result<T, E>
where
    E: Into<ChanfluxError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| attach_context(context.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| attach_context(f(), e.into()))
    }
}

fn attach_context(context: String, error: ChanfluxError) -> ChanfluxError {
    match error {
        ChanfluxError::UserError(inner) => ChanfluxError::StreamProcessingError {
            context: format!("{context}: {inner}"),
        },
        ChanfluxError::StreamProcessingError { context: inner } => {
            ChanfluxError::StreamProcessingError {
                context: format!("{context}: {inner}"),
            }
        }
        other => other,
    }
}

impl Clone for ChanfluxError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::TaskPanicked { count } => Self::TaskPanicked { count: *count },
            Self::Cancelled => Self::Cancelled,
        }
    }
}
