//! Testimonial carousel: looping position and timed auto-advance.
//!
//! [`AutoAdvance`] is a guard. While it lives, the carousel moves to the next
//! item every [`CAROUSEL_INTERVAL`]; dropping it (on unmount) cancels the
//! periodic task so no tick ever reaches a torn-down carousel.
//!
//! There is no pause on hover or after manual navigation. Manual prev/next and
//! the timer drive the same position, so the next tick may follow a manual
//! step immediately.

use std::time::Duration;

use futures::future::{AbortHandle, abortable};
use tracing::debug;

use crate::config::CAROUSEL_INTERVAL;
use crate::timer::{Spawner, Timer};

/// Navigation capability of a mounted carousel.
pub trait CarouselHandle: 'static {
    /// Move to the next item, wrapping to the first after the last.
    fn advance(&self);
}

/// Index into a looping list of `len` items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselPosition {
    index: usize,
    len: usize,
}

impl CarouselPosition {
    /// Start at the first of `len` items.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current item.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward, looping. No-op on an empty carousel.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back, looping. No-op on an empty carousel.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`, clamped to the last item.
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }
}

/// Running auto-advance. Dropping it stops the timer.
#[derive(Debug)]
#[must_use = "auto-advance stops as soon as the guard is dropped"]
pub struct AutoAdvance {
    abort: AbortHandle,
}

impl AutoAdvance {
    /// Advance `carousel` every [`CAROUSEL_INTERVAL`] until dropped.
    pub fn start<C, T, S>(carousel: C, timer: T, spawner: &S) -> Self
    where
        C: CarouselHandle,
        T: Timer + 'static,
        S: Spawner,
    {
        Self::every(CAROUSEL_INTERVAL, carousel, timer, spawner)
    }

    /// Advance `carousel` every `interval` until dropped.
    pub fn every<C, T, S>(interval: Duration, carousel: C, timer: T, spawner: &S) -> Self
    where
        C: CarouselHandle,
        T: Timer + 'static,
        S: Spawner,
    {
        let (ticks, abort) = abortable(tick_forever(interval, carousel, timer));
        spawner.spawn_local(async move {
            if ticks.await.is_err() {
                debug!("carousel auto-advance stopped");
            }
        });
        debug!(interval_ms = interval.as_millis() as u64, "carousel auto-advance started");
        Self { abort }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

async fn tick_forever<C: CarouselHandle, T: Timer>(interval: Duration, carousel: C, timer: T) {
    loop {
        timer.sleep(interval).await;
        carousel.advance();
    }
}
