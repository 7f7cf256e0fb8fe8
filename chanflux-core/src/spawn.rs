// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic detached task spawning.
//!
//! Every operator runs its loop on a background task spawned through
//! [`spawn_detached`]. The executor is picked at compile time:
//!
//! - **Tokio**: `tokio::spawn` (default, `runtime-tokio`)
//! - **smol**: `smol::spawn(..).detach()` (`runtime-smol`)
//! - **async-std**: `async_std::task::spawn` (`runtime-async-std`)
//!
//! When several runtime features are enabled, tokio wins over smol, and smol
//! wins over async-std.

use core::future::Future;

#[cfg(not(any(
    feature = "runtime-tokio",
    feature = "runtime-smol",
    feature = "runtime-async-std"
)))]
compile_error!(
    "chanflux-core needs a runtime: enable one of `runtime-tokio`, `runtime-smol` or `runtime-async-std`"
);

/// Spawn a future on the configured runtime without keeping a handle to it.
///
/// Completion is tracked by the caller, usually through a
/// [`TaskGroup`](crate::TaskGroup) or by the closing of an output channel.
///
/// # Panics
///
/// With `runtime-tokio`, panics when called outside of a tokio runtime.
pub fn spawn_detached<Fut>(future: Fut)
where
    Fut: Future<Output = ()> + Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    {
        tokio::spawn(future);
    }

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    {
        smol::spawn(future).detach();
    }

    #[cfg(all(
        feature = "runtime-async-std",
        not(feature = "runtime-tokio"),
        not(feature = "runtime-smol")
    ))]
    {
        async_std::task::spawn(future);
    }
}
