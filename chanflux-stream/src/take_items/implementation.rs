// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::race::{next_or_cancel, send_or_cancel, Next};
use crate::relay::relay;
use crate::sources::empty;
use chanflux_core::{channel, spawn_detached, trace, CancellationToken, Receiver, OUTPUT_CAPACITY};
use futures::Stream;

/// Extension trait providing the `take_items` operators.
pub trait TakeItemsExt<T>: Stream<Item = T> + Sized {
    /// Emits only the first `n` items, then completes.
    ///
    /// See the [module-level documentation](crate::take_items) for details.
    fn take_items(self, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static;

    /// Emits items until the input closes or `cancel` fires.
    fn take_items_until(self, cancel: CancellationToken) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> TakeItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn take_items(self, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        if n == 0 {
            return empty();
        }

        let (out, rx) = channel(OUTPUT_CAPACITY);

        spawn_detached(async move {
            let mut input = Box::pin(self);
            let mut taken = 0_usize;

            while taken < n {
                let Next::Item(item) = next_or_cancel(&mut input, None).await else {
                    break;
                };
                if !send_or_cancel(&out, item, None).await.is_delivered() {
                    break;
                }
                taken += 1;
            }

            drop(input);
            out.close();
            trace!("take_items closed after {taken} of {n} values");
        });

        rx
    }

    fn take_items_until(self, cancel: CancellationToken) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        relay(self, core::convert::identity, Some(cancel))
    }
}
