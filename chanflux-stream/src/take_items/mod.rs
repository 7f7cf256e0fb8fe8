// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-items operators - forward a prefix of the input.
//!
//! - [`take_items(n)`](TakeItemsExt::take_items) forwards at most `n` items,
//!   then closes the output and drops the input. `take_items(0)` returns an
//!   already-closed channel without spawning anything.
//! - [`take_items_until(token)`](TakeItemsExt::take_items_until) forwards
//!   every item until the input closes or the token fires.
//!
//! Dropping the input once the quota is reached is what lets an endless
//! producer notice that nobody reads anymore.
//!
//! # Examples
//!
//! ```rust
//! use chanflux_stream::TakeItemsExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let first: Vec<u64> = stream::repeat(7).take_items(3).collect().await;
//!
//! assert_eq!(first, vec![7, 7, 7]);
//! # }
//! ```
//!
//! # See Also
//!
//! - [`MapItemsExt::map_items_until`](crate::MapItemsExt::map_items_until) - Transform until cancelled

mod implementation;

pub use implementation::TakeItemsExt;
