// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Building blocks shared by the chanflux operators.
//!
//! - [`channel`]: bounded, closeable, single-consumer channels ([`Sender`], [`Receiver`])
//! - [`CancellationToken`]: one-shot broadcast stop signal
//! - [`CancelContext`]: a token bundled with caller data
//! - [`TaskGroup`]: counting join barrier over spawned tasks
//! - [`ChanfluxError`] and [`Maybe`]: error type and success/failure container

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancel_context;
pub mod cancellation_token;
pub mod channel;
pub mod error;
#[doc(hidden)]
pub mod logging;
pub mod maybe;
pub mod spawn;
pub mod task_group;

pub use self::cancel_context::CancelContext;
pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::channel::{channel, Receiver, SendError, Sender, OUTPUT_CAPACITY};
pub use self::error::{ChanfluxError, IntoChanfluxError, Result, ResultExt};
pub use self::maybe::Maybe;
pub use self::spawn::spawn_detached;
pub use self::task_group::TaskGroup;
