// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test producers and helpers for the chanflux workspace.
//!
//! This crate is meant for development and testing only.
//!
//! # Producers
//!
//! Every producer spawns one task that writes into a bounded
//! [`Receiver`](chanflux_core::Receiver) of the requested buffer size. The
//! task stops as soon as a send fails, so dropping the receiver (or an
//! operator abandoning its input) ends an endless producer too.
//!
//! ```rust
//! use chanflux_test_utils::int_range;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let values: Vec<usize> = int_range(0, 5, 3).collect().await;
//! assert_eq!(values, vec![5, 6, 7]);
//! # }
//! ```
//!
//! # Helpers
//!
//! Timeout-guarded assertions that panic with a readable message instead of
//! hanging a test forever:
//!
//! ```rust
//! use chanflux_test_utils::{assert_stream_ended, unwrap_stream};
//! use chanflux_test_utils::producers::repeat;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut stream = repeat(1, 'x', 1);
//! assert_eq!(unwrap_stream(&mut stream, 500).await, 'x');
//! assert_stream_ended(&mut stream, 500).await;
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod producers;

pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_with_timeout, occurrences,
    unwrap_stream,
};
pub use producers::{infinite, int_range, repeat, string_int_range};

/// Number of elements the operator suites push through each pipeline.
pub const ELEMENT_COUNT: usize = 100;

/// Producer buffer sizes every operator suite runs with. Zero is rounded up to one.
pub const BUFFER_SIZES: [usize; 3] = [0, 1, 100];
