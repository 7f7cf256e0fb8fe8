// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent channel-backed stream operators.
//!
//! Every operator reads its input on spawned tasks and hands back a
//! [`Receiver`], a bounded channel that is itself a [`Stream`](futures::Stream).
//! Outputs therefore compose: the receiver of one stage is the input of the next.
//!
//! # Architecture
//!
//! - **Fan-in**: [`flatten_items`](FlattenItemsExt::flatten_items) and
//!   [`bind_items`](BindItemsExt::bind_items) drain every inner stream on its
//!   own task and merge the values into one output. A [`TaskGroup`] joins the
//!   drain tasks and the output closes exactly once, after the join.
//! - **One-stage operators**: [`map_items`](MapItemsExt::map_items),
//!   [`take_items`](TakeItemsExt::take_items) and
//!   [`aggregate`](AggregateExt::aggregate) run a single task per call.
//! - **Sources**: [`just`] and [`empty`] build ready-made channels.
//!
//! # Ordering
//!
//! Values of one inner stream keep their order. Values of different inner
//! streams interleave arbitrarily.
//!
//! # Cancellation
//!
//! The `_until` variants take a [`CancellationToken`]. Once it fires no new
//! inner stream is opened, every pending receive or send gives up, and the
//! output closes after the remaining tasks have exited. Dropping an output
//! receiver has the same effect on the tasks feeding it, token or not.
//!
//! ```rust
//! use chanflux_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lengths = stream::iter(0..100)
//!     .bind_items(|x| just(x.to_string()))
//!     .bind_items(|s| just(s.len()));
//!
//! let sum: Vec<usize> = lengths.aggregate(0, |acc, n| acc + n).collect().await;
//! assert_eq!(sum, vec![190]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod aggregate;
pub mod bind_items;
mod fan_in;
pub mod flatten_items;
pub mod map_items;
pub mod prelude;
mod race;
mod relay;
pub mod sources;
pub mod take_items;

pub use aggregate::AggregateExt;
pub use bind_items::BindItemsExt;
pub use flatten_items::FlattenItemsExt;
pub use map_items::MapItemsExt;
pub use sources::{empty, just};
pub use take_items::TakeItemsExt;

pub use chanflux_core::{CancelContext, CancellationToken, Receiver, TaskGroup};
