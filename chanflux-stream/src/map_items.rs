// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - transforms each item on a dedicated task.
//!
//! The input is read by a single spawned task, so values leave in the order
//! they arrived. The output closes when the input is exhausted, when the
//! token fires (for [`map_items_until`](MapItemsExt::map_items_until)), or
//! when the consumer drops the output.
//!
//! # Examples
//!
//! ```rust
//! use chanflux_stream::MapItemsExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let doubled: Vec<i32> = stream::iter(1..=3).map_items(|x| x * 2).collect().await;
//!
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # }
//! ```

use crate::relay::relay;
use chanflux_core::{CancellationToken, Receiver};
use futures::Stream;

/// Extension trait providing the `map_items` operators.
pub trait MapItemsExt<T>: Stream<Item = T> + Sized {
    /// Applies `f` to every item.
    fn map_items<F, R>(self, f: F) -> Receiver<R>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> R + Send + 'static,
        R: Send + 'static;

    /// Applies `f` to every item until `cancel` fires.
    ///
    /// An item already read when the token fires may still be dropped
    /// instead of delivered.
    fn map_items_until<F, R>(self, cancel: CancellationToken, f: F) -> Receiver<R>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> R + Send + 'static,
        R: Send + 'static;
}

impl<S, T> MapItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn map_items<F, R>(self, f: F) -> Receiver<R>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        relay(self, f, None)
    }

    fn map_items_until<F, R>(self, cancel: CancellationToken, f: F) -> Receiver<R>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        relay(self, f, Some(cancel))
    }
}
