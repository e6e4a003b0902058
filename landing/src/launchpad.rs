//! Page-wide state and the two actions that reach the backend.
//!
//! [`Launchpad`] lives in context. It owns the form signals and builds a
//! [`SubmissionController`] for each action; pending guards live in the
//! signals, so a fresh controller still sees an order or lead in flight.

use launchpad_core::{
    ApiConfig, FormState, HttpBackend, SubmissionController, SubmissionStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::BrowserTimer;
use crate::toast::Toaster;

type Controller = SubmissionController<HttpBackend, Toaster, BrowserTimer, SignalFormState>;

/// Form field and pending flags as reactive signals.
#[derive(Clone, Copy)]
pub struct SignalFormState {
    pub email: RwSignal<String>,
    pub lead_status: RwSignal<SubmissionStatus>,
    pub order_status: RwSignal<SubmissionStatus>,
}

impl SignalFormState {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            lead_status: RwSignal::new(SubmissionStatus::Idle),
            order_status: RwSignal::new(SubmissionStatus::Idle),
        }
    }
}

impl FormState for SignalFormState {
    fn email(&self) -> String {
        self.email.get_untracked()
    }

    fn set_email(&self, email: String) {
        self.email.set(email);
    }

    fn lead_status(&self) -> SubmissionStatus {
        self.lead_status.get_untracked()
    }

    fn set_lead_status(&self, status: SubmissionStatus) {
        self.lead_status.set(status);
    }

    fn order_status(&self) -> SubmissionStatus {
        self.order_status.get_untracked()
    }

    fn set_order_status(&self, status: SubmissionStatus) {
        self.order_status.set(status);
    }
}

#[derive(Clone, Copy)]
pub struct Launchpad {
    pub form: SignalFormState,
    toaster: Toaster,
    api: StoredValue<ApiConfig>,
}

impl Launchpad {
    pub fn new(config: ApiConfig, toaster: Toaster) -> Self {
        Self {
            form: SignalFormState::new(),
            toaster,
            api: StoredValue::new(config),
        }
    }

    fn controller(&self) -> Controller {
        SubmissionController::new(
            HttpBackend::new(self.api.get_value()),
            self.toaster,
            BrowserTimer,
            self.form,
        )
    }

    /// Submit whatever is in the email field.
    pub fn submit_lead(self) {
        let email = self.form.email();
        spawn_local(async move {
            self.controller().submit_lead(&email).await;
        });
    }

    /// Start the mock checkout for `tier`.
    pub fn purchase(self, tier: &'static str) {
        spawn_local(async move {
            self.controller().purchase_tier(tier).await;
        });
    }

    pub fn lead_pending(&self) -> bool {
        self.form.lead_status.get().is_pending()
    }

    pub fn order_pending(&self) -> bool {
        self.form.order_status.get().is_pending()
    }
}
