// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Constant sources. Neither spawns a task.

use chanflux_core::{channel, Receiver};

/// Returns a channel that yields `value` once and then closes.
///
/// ```rust
/// use chanflux_stream::just;
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let values: Vec<&str> = just("only").collect().await;
/// assert_eq!(values, vec!["only"]);
/// # }
/// ```
pub fn just<T>(value: T) -> Receiver<T> {
    let (tx, rx) = channel(1);
    let sent = tx.try_send(value);
    debug_assert!(sent.is_ok());
    rx
}

/// Returns a channel that is already closed.
pub fn empty<T>() -> Receiver<T> {
    let (tx, rx) = channel(1);
    tx.close();
    rx
}
