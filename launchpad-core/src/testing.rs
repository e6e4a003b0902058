//! In-memory fakes for the controller seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::time::Instant;

use crate::api::Backend;
use crate::carousel::CarouselHandle;
use crate::error::SubmissionError;
use crate::model::{LeadSubmission, OrderRequest, SubmissionStatus};
use crate::notify::{Notice, NoticeLevel, Notifier};
use crate::state::FormState;

#[derive(Default)]
struct BackendLog {
    leads: RefCell<Vec<LeadSubmission>>,
    orders: RefCell<Vec<OrderRequest>>,
    failing: Cell<bool>,
    latency: Cell<Duration>,
}

/// Records every request; answers after `latency`, failing on demand.
#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    log: Rc<BackendLog>,
}

impl FakeBackend {
    pub(crate) fn failing() -> Self {
        let backend = Self::default();
        backend.log.failing.set(true);
        backend
    }

    pub(crate) fn with_latency(self, latency: Duration) -> Self {
        self.log.latency.set(latency);
        self
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.log.failing.set(failing);
    }

    pub(crate) fn leads(&self) -> Vec<LeadSubmission> {
        self.log.leads.borrow().clone()
    }

    pub(crate) fn orders(&self) -> Vec<OrderRequest> {
        self.log.orders.borrow().clone()
    }

    async fn answer(&self) -> Result<(), SubmissionError> {
        let latency = self.log.latency.get();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        if self.log.failing.get() {
            Err(SubmissionError::new("backend answered 500 Internal Server Error"))
        } else {
            Ok(())
        }
    }
}

impl Backend for FakeBackend {
    async fn create_lead(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        self.log.leads.borrow_mut().push(lead.clone());
        self.answer().await
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<(), SubmissionError> {
        self.log.orders.borrow_mut().push(order.clone());
        self.answer().await
    }
}

/// Keeps every notice with the (paused) time it was shown.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    shown: Rc<RefCell<Vec<(Instant, Notice)>>>,
}

impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.shown.borrow().iter().map(|(_, n)| n.clone()).collect()
    }

    pub(crate) fn levels(&self) -> Vec<NoticeLevel> {
        self.shown.borrow().iter().map(|(_, n)| n.level).collect()
    }

    /// When the first notice of `level` was shown.
    pub(crate) fn shown_at(&self, level: NoticeLevel) -> Option<Instant> {
        self.shown
            .borrow()
            .iter()
            .find(|(_, n)| n.level == level)
            .map(|(at, _)| *at)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.shown.borrow_mut().push((Instant::now(), notice));
    }
}

#[derive(Default)]
struct StateCells {
    email: RefCell<String>,
    lead: Cell<SubmissionStatus>,
    order: Cell<SubmissionStatus>,
    lead_history: RefCell<Vec<SubmissionStatus>>,
    order_history: RefCell<Vec<SubmissionStatus>>,
}

/// Plain cells plus a history of every status written.
#[derive(Clone, Default)]
pub(crate) struct RecordingState {
    cells: Rc<StateCells>,
}

impl RecordingState {
    pub(crate) fn with_email(email: &str) -> Self {
        let state = Self::default();
        state.set_email(email.to_string());
        state
    }

    pub(crate) fn lead_history(&self) -> Vec<SubmissionStatus> {
        self.cells.lead_history.borrow().clone()
    }

    pub(crate) fn order_history(&self) -> Vec<SubmissionStatus> {
        self.cells.order_history.borrow().clone()
    }
}

impl FormState for RecordingState {
    fn email(&self) -> String {
        self.cells.email.borrow().clone()
    }

    fn set_email(&self, email: String) {
        *self.cells.email.borrow_mut() = email;
    }

    fn lead_status(&self) -> SubmissionStatus {
        self.cells.lead.get()
    }

    fn set_lead_status(&self, status: SubmissionStatus) {
        self.cells.lead.set(status);
        self.cells.lead_history.borrow_mut().push(status);
    }

    fn order_status(&self) -> SubmissionStatus {
        self.cells.order.get()
    }

    fn set_order_status(&self, status: SubmissionStatus) {
        self.cells.order.set(status);
        self.cells.order_history.borrow_mut().push(status);
    }
}

/// Counts `advance` calls.
#[derive(Clone, Default)]
pub(crate) struct CountingCarousel {
    advances: Rc<Cell<usize>>,
}

impl CountingCarousel {
    pub(crate) fn advances(&self) -> usize {
        self.advances.get()
    }
}

impl CarouselHandle for CountingCarousel {
    fn advance(&self) {
        self.advances.set(self.advances.get() + 1);
    }
}
