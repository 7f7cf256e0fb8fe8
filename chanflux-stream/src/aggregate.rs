// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregate operator - folds the whole input into one value.
//!
//! The output yields exactly one value once the input is exhausted and then
//! closes. An empty input yields the seed.
//!
//! # Examples
//!
//! ```rust
//! use chanflux_stream::AggregateExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sum: Vec<u32> = stream::iter(1..=100).aggregate(0, |acc, x| acc + x).collect().await;
//!
//! assert_eq!(sum, vec![5050]);
//! # }
//! ```

use chanflux_core::{channel, spawn_detached, trace, Receiver};
use futures::{Stream, StreamExt};

/// Extension trait providing the `aggregate` operator.
pub trait AggregateExt<T>: Stream<Item = T> + Sized {
    /// Folds `f(acc, item)` over every item, starting from `seed`.
    fn aggregate<R, F>(self, seed: R, f: F) -> Receiver<R>
    where
        Self: Send + 'static,
        T: Send,
        R: Send + 'static,
        F: FnMut(R, T) -> R + Send + 'static;
}

impl<S, T> AggregateExt<T> for S
where
    S: Stream<Item = T>,
{
    fn aggregate<R, F>(self, seed: R, mut f: F) -> Receiver<R>
    where
        Self: Send + 'static,
        T: Send,
        R: Send + 'static,
        F: FnMut(R, T) -> R + Send + 'static,
    {
        let (out, rx) = channel(1);

        spawn_detached(async move {
            let mut input = Box::pin(self);
            let mut acc = seed;
            let mut folded = 0_usize;

            while let Some(item) = input.next().await {
                acc = f(acc, item);
                folded += 1;
            }

            match out.send(acc).await {
                Ok(()) => trace!("aggregate emitted after folding {folded} values"),
                Err(_) => trace!("aggregate output abandoned after folding {folded} values"),
            }
            out.close();
        });

        rx
    }
}
