// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Receive and send steps raced against an optional cancellation token.
//!
//! `futures::select!` picks uniformly among ready branches, so neither a
//! pending value nor a fired token can starve the other. A token that has
//! already fired short-circuits the step without touching the stream.

use chanflux_core::{CancellationToken, Sender};
use futures::{FutureExt, Stream, StreamExt};

/// Outcome of waiting for the next input value.
pub(crate) enum Next<T> {
    Item(T),
    Exhausted,
    Cancelled,
}

/// Outcome of handing a value to an output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    Delivered,
    /// The consumer dropped or closed the output.
    Abandoned,
    Cancelled,
}

impl Delivery {
    pub(crate) fn is_delivered(self) -> bool {
        self == Delivery::Delivered
    }
}

/// Waits for the next value of `input`, or for `cancel` to fire.
pub(crate) async fn next_or_cancel<S>(
    input: &mut S,
    cancel: Option<&CancellationToken>,
) -> Next<S::Item>
where
    S: Stream + Unpin,
{
    let item = match cancel {
        None => input.next().await,
        Some(token) if token.is_cancelled() => return Next::Cancelled,
        Some(token) => futures::select! {
            () = token.cancelled().fuse() => return Next::Cancelled,
            item = input.next().fuse() => item,
        },
    };

    match item {
        Some(item) => Next::Item(item),
        None => Next::Exhausted,
    }
}

/// Sends `value` into `out`, giving up if `cancel` fires first.
pub(crate) async fn send_or_cancel<T>(
    out: &Sender<T>,
    value: T,
    cancel: Option<&CancellationToken>,
) -> Delivery {
    let sent = match cancel {
        None => out.send(value).await,
        Some(token) if token.is_cancelled() => return Delivery::Cancelled,
        Some(token) => futures::select! {
            () = token.cancelled().fuse() => return Delivery::Cancelled,
            sent = out.send(value).fuse() => sent,
        },
    };

    match sent {
        Ok(()) => Delivery::Delivered,
        Err(_) => Delivery::Abandoned,
    }
}
