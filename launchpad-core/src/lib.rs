//! # launchpad-core
//!
//! The stateful half of the Launchpad landing page: lead capture, the mock
//! checkout flow and the testimonial carousel timer.
//!
//! Everything here is independent of the DOM. The page plugs its own
//! implementations into four seams:
//!
//! - [`Backend`] - where leads and orders are sent ([`HttpBackend`] talks to the real API)
//! - [`Notifier`] - how toasts reach the user
//! - [`Timer`] / [`Spawner`] - how time passes and background work runs
//! - [`FormState`] - where the email field and pending flags live
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use launchpad_core::{ApiConfig, HttpBackend, SubmissionController};
//!
//! let backend = HttpBackend::new(ApiConfig::from_env());
//! let controller = SubmissionController::new(backend, toaster, timer, form);
//!
//! controller.submit_lead("ama@example.com").await;
//! controller.purchase_tier("Standard VIP").await;
//! ```
//!
//! ## Modules
//!
//! - [`model`] - leads, orders, tiers and submission status
//! - [`config`] - backend location and timing constants
//! - [`api`] - the backend seam and its HTTP client
//! - [`submission`] - the lead and order flows
//! - [`carousel`] - looping position and the auto-advance guard
//!
//! ---
//!
//! Built for BUG Social Media Agency (c)2025

#![warn(missing_docs)]

pub mod api;
pub mod carousel;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod state;
pub mod submission;
pub mod timer;

#[cfg(test)]
mod testing;

pub use api::{Backend, HttpBackend};
pub use carousel::{AutoAdvance, CarouselHandle, CarouselPosition};
pub use config::{ApiConfig, CAROUSEL_INTERVAL, PAYMENT_SETTLE_DELAY};
pub use error::SubmissionError;
pub use model::{LeadSubmission, OrderRequest, SubmissionStatus, Tier};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use state::FormState;
pub use submission::SubmissionController;
pub use timer::{Spawner, Timer};

#[cfg(not(target_arch = "wasm32"))]
pub use timer::{TokioSpawner, TokioTimer};
