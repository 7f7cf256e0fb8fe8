// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use tokio::time::{sleep, timeout};

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Returns the next item, panicking if the stream ends or stays silent for `timeout_ms`.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected item but stream ended"),
        Err(_) => panic!("Timeout: No item received within {timeout_ms} ms"),
    }
}

pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end but it returned a value"),
        Err(_) => panic!("Timeout: Stream did not end within {timeout_ms} ms"),
    }
}

/// Drains the stream to its end, panicking if that takes longer than `timeout_ms`.
pub async fn collect_with_timeout<S, T>(stream: S, timeout_ms: u64) -> Vec<T>
where
    S: Stream<Item = T>,
{
    timeout(Duration::from_millis(timeout_ms), stream.collect::<Vec<T>>())
        .await
        .unwrap_or_else(|_| panic!("Timeout: Stream did not end within {timeout_ms} ms"))
}

/// Counts how often each distinct value occurs.
pub fn occurrences<T>(values: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}
