// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bind operator - maps each item to a stream and merges the results.
//!
//! `bind_items(f)` behaves like `map_items(f).flatten_items()` but applies
//! `f` inside the fan-in loop, at the moment each item is read. No
//! intermediate channel of channels and no extra mapping task are created.
//!
//! # Examples
//!
//! ```rust
//! use chanflux_stream::{just, BindItemsExt};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let words = stream::iter(vec!["a", "bb", "ccc"]);
//!
//! let total: usize = words
//!     .bind_items(|word| just(word.len()))
//!     .fold(0, |acc, n| async move { acc + n })
//!     .await;
//!
//! assert_eq!(total, 6);
//! # }
//! ```

use crate::fan_in::fan_in;
use chanflux_core::{CancelContext, CancellationToken, Receiver};
use futures::Stream;

/// Extension trait providing the `bind_items` operators.
pub trait BindItemsExt<T>: Stream<Item = T> + Sized {
    /// Opens a stream per item with `f` and merges all of them into one channel.
    ///
    /// Values of one inner stream keep their order. Values of different inner
    /// streams interleave arbitrarily.
    fn bind_items<F, I>(self, f: F) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> I + Send + 'static,
        I: Stream + Send + 'static,
        I::Item: Send + 'static;

    /// Like [`bind_items`](BindItemsExt::bind_items), stopping early when `cancel` fires.
    fn bind_items_until<F, I>(self, cancel: CancellationToken, f: F) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> I + Send + 'static,
        I: Stream + Send + 'static,
        I::Item: Send + 'static;

    /// Like [`bind_items_until`](BindItemsExt::bind_items_until), driven by a [`CancelContext`].
    ///
    /// The context's token stops the operator and the context itself is
    /// handed to every call of `f`.
    ///
    /// ```rust
    /// use chanflux_core::CancelContext;
    /// use chanflux_stream::{just, BindItemsExt};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let ctx = CancelContext::new(10);
    ///
    /// let mut scaled: Vec<i32> = stream::iter(vec![1, 2])
    ///     .bind_items_with_context(ctx, |ctx, x| just(x * *ctx.data()))
    ///     .collect()
    ///     .await;
    /// scaled.sort();
    ///
    /// assert_eq!(scaled, vec![10, 20]);
    /// # }
    /// ```
    fn bind_items_with_context<D, F, I>(self, ctx: CancelContext<D>, f: F) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        T: Send,
        D: Send + Sync + 'static,
        F: FnMut(&CancelContext<D>, T) -> I + Send + 'static,
        I: Stream + Send + 'static,
        I::Item: Send + 'static;
}

impl<S, T> BindItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn bind_items<F, I>(self, f: F) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> I + Send + 'static,
        I: Stream + Send + 'static,
        I::Item: Send + 'static,
    {
        fan_in(self, f, None)
    }

    fn bind_items_until<F, I>(self, cancel: CancellationToken, f: F) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        T: Send,
        F: FnMut(T) -> I + Send + 'static,
        I: Stream + Send + 'static,
        I::Item: Send + 'static,
    {
        fan_in(self, f, Some(cancel))
    }

    fn bind_items_with_context<D, F, I>(self, ctx: CancelContext<D>, mut f: F) -> Receiver<I::Item>
    where
        Self: Send + 'static,
        T: Send,
        D: Send + Sync + 'static,
        F: FnMut(&CancelContext<D>, T) -> I + Send + 'static,
        I: Stream + Send + 'static,
        I::Item: Send + 'static,
    {
        let cancel = ctx.token().clone();
        self.bind_items_until(cancel, move |value| f(&ctx, value))
    }
}
