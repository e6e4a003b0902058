//! The two user actions that reach the backend.
//!
//! - [`SubmissionController::submit_lead`] - the free checklist form
//! - [`SubmissionController::purchase_tier`] - a pricing card button
//!
//! Each action owns one status in [`FormState`] and walks
//! `Idle -> Pending -> {Succeeded, Failed} -> Idle`. Whatever the backend
//! does, the action ends idle so the control is usable again. Failures become
//! an error toast and a `warn!` trace; nothing is retried automatically.

use std::pin::pin;

use futures::future::{self, Either};
use tracing::{debug, info, warn};

use crate::api::Backend;
use crate::config::PAYMENT_SETTLE_DELAY;
use crate::model::{LeadSubmission, OrderRequest, SubmissionStatus};
use crate::notify::{Notice, Notifier};
use crate::state::FormState;
use crate::timer::Timer;

/// Toast after a lead was recorded.
pub const LEAD_SUCCESS: &str = "Success! The checklist has been sent to your email.";
/// Toast after a lead failed.
pub const LEAD_FAILURE: &str = "Something went wrong. Please try again.";
/// Toast once the simulated payment has settled.
pub const ORDER_SUCCESS: &str = "Payment Successful! Downloading your Launchpad...";
/// Toast after an order failed.
pub const ORDER_FAILURE: &str = "Could not process order. Please try again.";

/// Toast shown as soon as a tier button is clicked.
pub fn order_started(tier: &str) -> String {
    format!("Starting secure payment for {tier}...")
}

/// Turns form submits and tier clicks into backend calls with feedback.
pub struct SubmissionController<B, N, T, S> {
    backend: B,
    notifier: N,
    timer: T,
    state: S,
}

impl<B, N, T, S> SubmissionController<B, N, T, S>
where
    B: Backend,
    N: Notifier,
    T: Timer,
    S: FormState,
{
    /// Wire the controller to its backend, toasts, clock and view state.
    pub fn new(backend: B, notifier: N, timer: T, state: S) -> Self {
        Self {
            backend,
            notifier,
            timer,
            state,
        }
    }

    /// Send `email` to the leads endpoint.
    ///
    /// The address is sent exactly as typed. On success the email field is
    /// cleared; on failure it is kept for a retry. Returns the terminal
    /// status, or `Idle` when nothing was sent (empty field, or a lead
    /// already in flight).
    pub async fn submit_lead(&self, email: &str) -> SubmissionStatus {
        if self.state.lead_status().is_pending() {
            debug!("lead submission already in flight, ignoring");
            return SubmissionStatus::Idle;
        }
        let Some(lead) = LeadSubmission::new(email) else {
            debug!("email field is empty, nothing to submit");
            return SubmissionStatus::Idle;
        };

        self.state.set_lead_status(SubmissionStatus::Pending);

        let outcome = match self.backend.create_lead(&lead).await {
            Ok(()) => {
                info!("lead recorded");
                self.notifier.notify(Notice::success(LEAD_SUCCESS));
                self.state.set_email(String::new());
                SubmissionStatus::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "lead submission failed");
                self.notifier.notify(Notice::error(LEAD_FAILURE));
                SubmissionStatus::Failed
            }
        };

        self.finish(outcome, S::set_lead_status)
    }

    /// Place a mock order for `tier`.
    ///
    /// An info toast goes out immediately. The success toast waits for the
    /// order to be accepted and for the simulated payment to settle
    /// ([`PAYMENT_SETTLE_DELAY`] after the request was issued), so it never
    /// shows before that delay and never shows for a failed order. Unknown
    /// tiers are ordered at amount 0.
    pub async fn purchase_tier(&self, tier: &str) -> SubmissionStatus {
        if self.state.order_status().is_pending() {
            debug!(tier, "order already in flight, ignoring");
            return SubmissionStatus::Idle;
        }

        let order = OrderRequest::for_tier(tier);
        if order.amount == 0 {
            debug!(tier, "unknown tier, ordering at amount 0");
        }

        self.notifier.notify(Notice::info(order_started(tier)));
        self.state.set_order_status(SubmissionStatus::Pending);

        let settle = pin!(self.timer.sleep(PAYMENT_SETTLE_DELAY));
        let request = pin!(self.backend.create_order(&order));
        let result = match future::select(request, settle).await {
            Either::Left((result, settle)) => {
                if result.is_ok() {
                    settle.await;
                }
                result
            }
            Either::Right(((), request)) => request.await,
        };

        let outcome = match result {
            Ok(()) => {
                info!(tier = %order.tier, amount = order.amount, "order placed");
                self.notifier.notify(Notice::success(ORDER_SUCCESS));
                SubmissionStatus::Succeeded
            }
            Err(err) => {
                warn!(tier = %order.tier, error = %err, "order failed");
                self.notifier.notify(Notice::error(ORDER_FAILURE));
                SubmissionStatus::Failed
            }
        };

        self.finish(outcome, S::set_order_status)
    }

    /// Publish the terminal status, then fold back to idle.
    fn finish(
        &self,
        outcome: SubmissionStatus,
        set: fn(&S, SubmissionStatus),
    ) -> SubmissionStatus {
        set(&self.state, outcome);
        set(&self.state, SubmissionStatus::Idle);
        outcome
    }
}
