// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Counting join barrier over detached tasks.
//!
//! A [`TaskGroup`] spawns any number of tasks and later waits for all of them
//! with [`wait`](TaskGroup::wait). Waiting consumes the group, so it is joined
//! exactly once and nothing can be registered after the join has started.

use crate::error::{ChanfluxError, Result};
use crate::spawn::spawn_detached;
use core::future::Future;
use core::panic::AssertUnwindSafe;
use core::sync::atomic::{AtomicUsize, Ordering};
use event_listener::Event;
use futures::FutureExt;
use std::sync::Arc;

/// A set of concurrently running tasks, joinable exactly once.
///
/// # Example
///
/// ```rust
/// use chanflux_core::TaskGroup;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let counter = Arc::new(AtomicU32::new(0));
/// let group = TaskGroup::new();
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     group.spawn(async move {
///         counter.fetch_add(1, Ordering::SeqCst);
///     });
/// }
///
/// group.wait().await.unwrap();
/// assert_eq!(counter.load(Ordering::SeqCst), 10);
/// # }
/// ```
#[derive(Debug)]
pub struct TaskGroup {
    state: Arc<State>,
}

#[derive(Debug)]
struct State {
    pending: AtomicUsize,
    panicked: AtomicUsize,
    finished: Event,
}

impl TaskGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self {
            state: Arc::new(State {
                pending: AtomicUsize::new(0),
                panicked: AtomicUsize::new(0),
                finished: Event::new(),
            }),
        }
    }

    /// Register and spawn a task.
    ///
    /// The task counts as pending from this call until it completes, panics,
    /// or is dropped by its runtime.
    pub fn spawn<Fut>(&self, future: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.state.pending.fetch_add(1, Ordering::AcqRel);
        let registration = Registration {
            state: Arc::clone(&self.state),
        };

        spawn_detached(async move {
            // Dropped when the body ends, after the future itself
            let registration = registration;
            if AssertUnwindSafe(future).catch_unwind().await.is_err() {
                registration.state.panicked.fetch_add(1, Ordering::AcqRel);
            }
        });
    }

    /// Number of registered tasks that have not finished yet.
    pub fn pending(&self) -> usize {
        self.state.pending.load(Ordering::Acquire)
    }

    /// Returns `true` if no registered task is still running.
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Wait until every registered task has finished.
    ///
    /// # Errors
    ///
    /// Returns [`ChanfluxError::TaskPanicked`] if any task panicked. Panicked
    /// tasks are still finished, so the wait itself always completes once the
    /// surviving tasks do.
    pub async fn wait(self) -> Result<()> {
        loop {
            if self.is_idle() {
                break;
            }

            let listener = self.state.finished.listen();

            // Re-check after registering so the last completion can't slip between
            if self.is_idle() {
                break;
            }

            listener.await;
        }

        match self.state.panicked.load(Ordering::Acquire) {
            0 => Ok(()),
            count => Err(ChanfluxError::TaskPanicked { count }),
        }
    }
}

impl Default for TaskGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks one task as finished when dropped, whichever way the task ends.
struct Registration {
    state: Arc<State>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if self.state.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.state.finished.notify(usize::MAX);
        }
    }
}
