// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent fan-in engine shared by `flatten_items` and `bind_items`.
//!
//! One invocation owns one output channel and one [`TaskGroup`]:
//!
//! 1. An outer loop reads the source one item at a time and turns each item
//!    into an inner stream (the identity for `flatten_items`, the caller's
//!    transform for `bind_items`).
//! 2. Each inner stream gets its own drain task in the group, forwarding its
//!    values into the shared output in the order it produced them.
//! 3. The outer loop stops when the source is exhausted, when the token fires,
//!    or when the consumer has dropped the output.
//! 4. The group is joined, then the output is closed. Closing happens exactly
//!    once and only after every drain task has finished.
//!
//! Values from different inner streams interleave in no particular order.
//!
//! # Panics
//!
//! A panicking inner stream ends only its own drain task. The others keep
//! delivering and the output still closes after the join. A panicking
//! transform stops the outer loop as if the source were exhausted. Both are
//! reported at warn level.
//!
//! # Cancellation
//!
//! With a token, the outer loop and every drain task race each receive and
//! each send against it. A drain task parked on a full output therefore still
//! exits once the token fires, even if nobody reads the output anymore, and
//! the join always completes.
//!
//! [`TaskGroup`]: chanflux_core::TaskGroup

mod engine;

pub(crate) use engine::fan_in;
