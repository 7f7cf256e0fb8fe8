// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::race::{next_or_cancel, send_or_cancel, Next};
use chanflux_core::{
    channel, debug, spawn_detached, trace, warn, CancellationToken, Receiver, Sender, TaskGroup,
    OUTPUT_CAPACITY,
};
use futures::Stream;
use std::panic::{self, AssertUnwindSafe};

/// Starts a fan-in over `source`, opening one inner stream per source item.
pub(crate) fn fan_in<S, F, I>(
    source: S,
    open: F,
    cancel: Option<CancellationToken>,
) -> Receiver<I::Item>
where
    S: Stream + Send + 'static,
    S::Item: Send,
    F: FnMut(S::Item) -> I + Send + 'static,
    I: Stream + Send + 'static,
    I::Item: Send + 'static,
{
    let (out, rx) = channel(OUTPUT_CAPACITY);
    spawn_detached(merge(source, open, cancel, out));
    rx
}

async fn merge<S, F, I>(
    source: S,
    mut open: F,
    cancel: Option<CancellationToken>,
    out: Sender<I::Item>,
)
where
    S: Stream + Send + 'static,
    S::Item: Send,
    F: FnMut(S::Item) -> I + Send + 'static,
    I: Stream + Send + 'static,
    I::Item: Send + 'static,
{
    let group = TaskGroup::new();
    let mut source = Box::pin(source);
    let mut opened = 0_usize;

    loop {
        if out.is_closed() {
            debug!("fan-in output dropped by its consumer after {opened} inner streams");
            break;
        }

        let item = match next_or_cancel(&mut source, cancel.as_ref()).await {
            Next::Item(item) => item,
            Next::Exhausted => {
                trace!("fan-in source exhausted after {opened} inner streams");
                break;
            }
            Next::Cancelled => {
                debug!("fan-in cancelled after {opened} inner streams");
                break;
            }
        };

        let Ok(inner) = panic::catch_unwind(AssertUnwindSafe(|| open(item))) else {
            warn!("fan-in transform panicked after {opened} inner streams, closing early");
            break;
        };

        group.spawn(drain(inner, out.clone(), cancel.clone()));
        opened += 1;
    }

    // Unread source items are abandoned, release their producer before joining
    drop(source);

    if let Err(error) = group.wait().await {
        warn!("fan-in drain tasks failed: {error}");
    }

    out.close();
    trace!("fan-in output closed after joining {opened} drain tasks");
}

async fn drain<I>(inner: I, out: Sender<I::Item>, cancel: Option<CancellationToken>)
where
    I: Stream,
{
    let mut inner = Box::pin(inner);

    loop {
        let value = match next_or_cancel(&mut inner, cancel.as_ref()).await {
            Next::Item(value) => value,
            Next::Exhausted | Next::Cancelled => break,
        };

        if !send_or_cancel(&out, value, cancel.as_ref()).await.is_delivered() {
            break;
        }
    }
}
