// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation token bundled with caller data.
//!
//! Some transforms need more than a stop flag: a request id, a client handle,
//! a deadline. A [`CancelContext`] carries the token every `_until` operator
//! already understands together with such data, shared behind an `Arc`.

use crate::cancellation_token::{CancellationToken, Cancelled};
use crate::error::ChanfluxError;
use std::sync::Arc;

/// A [`CancellationToken`] plus shared caller-supplied data.
///
/// # Example
///
/// ```
/// use chanflux_core::CancelContext;
///
/// let ctx = CancelContext::new("request-17");
/// assert_eq!(*ctx.data(), "request-17");
/// assert!(ctx.err().is_none());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// assert!(ctx.err().is_some());
/// ```
#[derive(Debug)]
pub struct CancelContext<D> {
    token: CancellationToken,
    data: Arc<D>,
}

impl<D> CancelContext<D> {
    /// Create a context with a fresh, uncancelled token.
    pub fn new(data: D) -> Self {
        Self::with_token(CancellationToken::new(), data)
    }

    /// Create a context around an existing token.
    pub fn with_token(token: CancellationToken, data: D) -> Self {
        Self {
            token,
            data: Arc::new(data),
        }
    }

    /// Derive a context that shares this token but carries different data.
    pub fn child<E>(&self, data: E) -> CancelContext<E> {
        CancelContext::with_token(self.token.clone(), data)
    }

    /// The underlying token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// The caller data.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Cancel the underlying token.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check whether the underlying token has fired.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the underlying token fires.
    pub fn cancelled(&self) -> Cancelled<'_> {
        self.token.cancelled()
    }

    /// `Some(ChanfluxError::Cancelled)` once the token has fired, `None` before.
    pub fn err(&self) -> Option<ChanfluxError> {
        self.is_cancelled().then_some(ChanfluxError::Cancelled)
    }
}

impl<D> Clone for CancelContext<D> {
    fn clone(&self) -> Self {
        Self {
            token: self.token.clone(),
            data: Arc::clone(&self.data),
        }
    }
}
