// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded, closeable, single-consumer channels.
//!
//! A [`Receiver`] is the unit of composition: every operator consumes a stream
//! and hands back a fresh `Receiver` that it alone feeds and closes. Closing
//! is terminal. Once the buffered values are drained the receiver yields
//! `None` forever.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{FusedStream, Stream};

pub use async_channel::SendError;

/// Capacity of every operator output channel.
///
/// One slot shared by all producers of an output. A producer that cannot
/// deliver parks on its send, where cancellation and consumer abandonment can
/// still reach it.
pub const OUTPUT_CAPACITY: usize = 1;

/// Creates a bounded channel holding at most `capacity` undelivered values.
///
/// A `capacity` of zero is rounded up to one.
///
/// # Example
///
/// ```
/// use chanflux_core::channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut rx) = channel(1);
/// tx.send(7).await.unwrap();
/// drop(tx);
///
/// assert_eq!(rx.next().await, Some(7));
/// assert_eq!(rx.next().await, None);
/// # }
/// ```
pub fn channel<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = async_channel::bounded(capacity.max(1));
    (Sender { inner: tx }, Receiver { inner: Box::pin(rx) })
}

/// Sending half of a [`channel`]. Cloning adds another producer.
///
/// The channel closes when [`close`](Sender::close) is called or when every
/// sender is dropped.
#[derive(Debug)]
pub struct Sender<T> {
    inner: async_channel::Sender<T>,
}

impl<T> Sender<T> {
    /// Sends a value, waiting for a free slot.
    ///
    /// # Errors
    ///
    /// Returns the value back if the channel is closed or the receiver is gone.
    pub async fn send(&self, value: T) -> Result<(), SendError<T>> {
        self.inner.send(value).await
    }

    /// Sends a value only if a slot is free right now.
    ///
    /// # Errors
    ///
    /// Returns the value back if the channel is full, closed, or the receiver is gone.
    pub fn try_send(&self, value: T) -> Result<(), T> {
        self.inner.try_send(value).map_err(|e| e.into_inner())
    }

    /// Closes the channel. Values already buffered remain receivable.
    ///
    /// Returns `true` if this call closed the channel.
    pub fn close(&self) -> bool {
        self.inner.close()
    }

    /// Returns `true` once the channel is closed, including when the receiver was dropped.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Receiving half of a [`channel`].
///
/// Implements [`Stream`]; `None` marks the close event. Not `Clone`: each
/// channel has at most one consumer. Dropping it closes the channel, and
/// producers see their sends fail.
#[derive(Debug)]
pub struct Receiver<T> {
    // Boxed so that `Receiver` stays `Unpin`
    inner: Pin<Box<async_channel::Receiver<T>>>,
}

impl<T> Receiver<T> {
    /// Number of values buffered and not yet received.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no value is buffered.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` once the channel is closed. Buffered values may remain.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Closes the channel from the consumer side.
    ///
    /// Producers blocked on a send are released with an error.
    pub fn close(&self) -> bool {
        self.inner.close()
    }
}

impl<T> Stream for Receiver<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedStream for Receiver<T> {
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
