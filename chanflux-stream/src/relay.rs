// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::race::{next_or_cancel, send_or_cancel, Next};
use chanflux_core::{channel, spawn_detached, trace, CancellationToken, Receiver, OUTPUT_CAPACITY};
use futures::Stream;

/// Spawns one task forwarding `f(item)` for every item of `input`.
///
/// The task stops when the input is exhausted, the token fires, or the
/// consumer drops the returned receiver. The output is closed on every path.
pub(crate) fn relay<S, F, R>(input: S, mut f: F, cancel: Option<CancellationToken>) -> Receiver<R>
where
    S: Stream + Send + 'static,
    S::Item: Send,
    F: FnMut(S::Item) -> R + Send + 'static,
    R: Send + 'static,
{
    let (out, rx) = channel(OUTPUT_CAPACITY);

    spawn_detached(async move {
        let mut input = Box::pin(input);
        let mut forwarded = 0_usize;

        loop {
            let item = match next_or_cancel(&mut input, cancel.as_ref()).await {
                Next::Item(item) => item,
                Next::Exhausted | Next::Cancelled => break,
            };

            if !send_or_cancel(&out, f(item), cancel.as_ref()).await.is_delivered() {
                break;
            }
            forwarded += 1;
        }

        out.close();
        trace!("relay closed after {forwarded} values");
    });

    rx
}
