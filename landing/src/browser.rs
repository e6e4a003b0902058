//! Browser implementations of the core timer seams, plus smooth scrolling.

use std::future::Future;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use launchpad_core::{Spawner, Timer};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// [`Timer`] on top of `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        // setTimeout starts counting here, not at first poll
        TimeoutFuture::new(timeout_millis(duration))
    }
}

/// [`Spawner`] on the page's local executor.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn_local<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(task);
    }
}

/// Smoothly scroll the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        tracing::debug!(id, "scroll target not found");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
