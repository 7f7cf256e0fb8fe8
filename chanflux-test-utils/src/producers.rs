// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chanflux_core::{channel, spawn_detached, Receiver, Sender};

/// Yields `start, start + 1, ..` for `count` values, then closes.
pub fn int_range(buffer: usize, start: usize, count: usize) -> Receiver<usize> {
    produce(buffer, (start..).take(count))
}

/// Like [`int_range`] with every value rendered in decimal.
pub fn string_int_range(buffer: usize, start: usize, count: usize) -> Receiver<String> {
    produce(buffer, (start..).take(count).map(|n| n.to_string()))
}

/// Yields `value` `count` times, then closes.
pub fn repeat<T>(buffer: usize, value: T, count: usize) -> Receiver<T>
where
    T: Clone + Send + 'static,
{
    produce(buffer, std::iter::repeat_n(value, count))
}

/// Yields `value` until the consumer goes away.
pub fn infinite<T>(buffer: usize, value: T) -> Receiver<T>
where
    T: Clone + Send + 'static,
{
    produce(buffer, std::iter::repeat(value))
}

fn produce<I>(buffer: usize, values: I) -> Receiver<I::Item>
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
{
    let (tx, rx) = channel(buffer);
    spawn_detached(feed(tx, values));
    rx
}

async fn feed<I: Iterator>(tx: Sender<I::Item>, values: I) {
    for value in values {
        if tx.send(value).await.is_err() {
            return;
        }
    }
}
