// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Chanflux
//!
//! Concurrent stream operators over bounded channels.
//!
//! ## Overview
//!
//! Every operator spawns its work on the configured runtime and returns a
//! [`Receiver`]. The centerpiece is fan-in: [`flatten_items`](FlattenItemsExt::flatten_items)
//! and [`bind_items`](BindItemsExt::bind_items) drain many inner streams at
//! once into a single output that closes exactly once, after every inner
//! stream is done.
//!
//! Each operator has an `_until` twin taking a [`CancellationToken`]. Firing
//! the token stops new work, ends every pending receive and send, and lets the
//! output close.
//!
//! ## Runtime selection
//!
//! | Feature             | Spawner                        |
//! |---------------------|--------------------------------|
//! | `runtime-tokio`     | `tokio::spawn` (default)       |
//! | `runtime-smol`      | `smol::spawn`                  |
//! | `runtime-async-std` | `async_std::task::spawn`       |
//!
//! With several enabled, tokio wins over smol, and smol over async-std.
//! The `tracing` feature routes internal diagnostics to `tracing`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chanflux::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let token = CancellationToken::new();
//!
//!     let mut merged = stream::iter(0..3)
//!         .bind_items_until(token.clone(), |x| just(x * 10))
//!         .take_items(2);
//!
//!     let mut seen = 0;
//!     while merged.next().await.is_some() {
//!         seen += 1;
//!     }
//!     token.cancel();
//!
//!     assert_eq!(seen, 2);
//! }
//! ```

pub use chanflux_core::{
    channel, CancelContext, CancellationToken, ChanfluxError, Maybe, Receiver, Result, Sender,
    TaskGroup, OUTPUT_CAPACITY,
};

pub use chanflux_stream::{
    empty, just, AggregateExt, BindItemsExt, FlattenItemsExt, MapItemsExt, TakeItemsExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use chanflux_core::Maybe;
    pub use chanflux_stream::prelude::*;
}
