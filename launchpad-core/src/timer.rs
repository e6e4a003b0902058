//! Time and background tasks.
//!
//! The page is single-threaded: tasks are spawned locally and nothing here is
//! required to be `Send`. The browser build supplies its own implementations
//! (timeouts and `spawn_local` from the page runtime); native builds and tests
//! use tokio.

use std::future::Future;
use std::time::Duration;

/// Source of delays.
pub trait Timer {
    /// Resolve after `duration`. The countdown starts when this is called,
    /// not when the future is first polled.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Runs detached work on the current thread.
pub trait Spawner {
    /// Start `task` in the background.
    fn spawn_local<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static;
}

/// [`Timer`] backed by `tokio::time`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// [`Spawner`] backed by `tokio::task::spawn_local`.
///
/// Must be used from inside a `tokio::task::LocalSet`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSpawner;

#[cfg(not(target_arch = "wasm32"))]
impl Spawner for TokioSpawner {
    fn spawn_local<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        // Detached; cancellation goes through the task's own abort handle
        drop(tokio::task::spawn_local(task));
    }
}
