// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flatten operator - merges a stream of streams into one channel.
//!
//! Every inner stream is drained by its own task, so a slow or idle inner
//! stream never holds back the others. Values keep their order within one
//! inner stream. Across inner streams they interleave arbitrarily.
//!
//! The output closes once the outer stream is exhausted (or the token fired)
//! and every inner stream has been drained (or abandoned after cancellation).
//! An inner stream that never closes keeps the output open for as long as no
//! token fires.
//!
//! # Examples
//!
//! ```rust
//! use chanflux_stream::{just, FlattenItemsExt};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let nested = stream::iter(vec![just(1), just(2), just(3)]);
//!
//! let mut values: Vec<i32> = nested.flatten_items().collect().await;
//! values.sort();
//!
//! assert_eq!(values, vec![1, 2, 3]);
//! # }
//! ```
//!
//! # See Also
//!
//! - [`BindItemsExt::bind_items`](crate::BindItemsExt::bind_items) - Map and flatten in one pass

use crate::fan_in::fan_in;
use chanflux_core::{CancellationToken, Receiver};
use futures::Stream;

/// Extension trait providing the `flatten_items` operators.
pub trait FlattenItemsExt<I>: Stream<Item = I> + Sized
where
    I: Stream,
{
    /// Merges every inner stream into a single output channel.
    ///
    /// See the [module-level documentation](crate::flatten_items) for details.
    fn flatten_items(self) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        I: Send + 'static,
        I::Item: Send + 'static;

    /// Like [`flatten_items`](FlattenItemsExt::flatten_items), stopping early when `cancel` fires.
    ///
    /// Once the token fires no further inner stream is opened, and every
    /// running drain task exits at its next receive or send.
    fn flatten_items_until(self, cancel: CancellationToken) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        I: Send + 'static,
        I::Item: Send + 'static;
}

impl<S, I> FlattenItemsExt<I> for S
where
    S: Stream<Item = I>,
    I: Stream,
{
    fn flatten_items(self) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        I: Send + 'static,
        I::Item: Send + 'static,
    {
        fan_in(self, core::convert::identity, None)
    }

    fn flatten_items_until(self, cancel: CancellationToken) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        I: Send + 'static,
        I::Item: Send + 'static,
    {
        fan_in(self, core::convert::identity, Some(cancel))
    }
}
