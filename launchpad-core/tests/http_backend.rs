//! HttpBackend against a real (in-process) HTTP server.
//!
//! The server records every JSON body it receives and answers with a fixed
//! status, standing in for the external leads/orders API.

use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use launchpad_core::{
    ApiConfig, Backend, FormState, HttpBackend, LeadSubmission, Notice, NoticeLevel, Notifier,
    OrderRequest, SubmissionController, SubmissionStatus, TokioTimer,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Received {
    leads: Arc<Mutex<Vec<Value>>>,
    orders: Arc<Mutex<Vec<Value>>>,
}

impl Received {
    fn leads(&self) -> Vec<Value> {
        self.leads.lock().unwrap().clone()
    }

    fn orders(&self) -> Vec<Value> {
        self.orders.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct AppState {
    received: Received,
    status: StatusCode,
}

async fn create_lead(State(app): State<AppState>, Json(body): Json<Value>) -> StatusCode {
    app.received.leads.lock().unwrap().push(body);
    app.status
}

async fn create_order(State(app): State<AppState>, Json(body): Json<Value>) -> StatusCode {
    app.received.orders.lock().unwrap().push(body);
    app.status
}

/// Start a fake API answering every request with `status`.
async fn serve(status: StatusCode) -> (ApiConfig, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/api/leads", post(create_lead))
        .route("/api/orders", post(create_order))
        .with_state(AppState {
            received: received.clone(),
            status,
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ApiConfig::new(format!("http://{addr}/")), received)
}

mod wire {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn lead_body_is_the_email() {
        let (config, received) = serve(StatusCode::CREATED).await;
        let backend = HttpBackend::new(config);

        let lead = LeadSubmission::new("a@b.com").unwrap();
        backend.create_lead(&lead).await.unwrap();

        assert_eq!(received.leads(), vec![json!({ "email": "a@b.com" })]);
        assert!(received.orders().is_empty());
    }

    #[tokio::test]
    async fn order_body_has_tier_and_amount() {
        let (config, received) = serve(StatusCode::OK).await;
        let backend = HttpBackend::new(config);

        backend
            .create_order(&OrderRequest::for_tier("Standard VIP"))
            .await
            .unwrap();

        assert_eq!(
            received.orders(),
            vec![json!({ "tier": "Standard VIP", "amount": 150 })]
        );
    }

    #[tokio::test]
    async fn non_2xx_is_a_failure() {
        let (config, received) = serve(StatusCode::INTERNAL_SERVER_ERROR).await;
        let backend = HttpBackend::new(config);

        let err = backend
            .create_order(&OrderRequest::for_tier("Starter"))
            .await
            .unwrap_err();

        assert!(err.detail().contains("500"), "{}", err.detail());
        // The request still reached the server exactly once
        assert_eq!(received.orders().len(), 1);
    }

    #[tokio::test]
    async fn validation_rejection_is_a_failure() {
        let (config, _) = serve(StatusCode::UNPROCESSABLE_ENTITY).await;
        let backend = HttpBackend::new(config);

        let lead = LeadSubmission::new("not-an-email").unwrap();
        assert!(backend.create_lead(&lead).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpBackend::new(ApiConfig::new(format!("http://{addr}")));
        let lead = LeadSubmission::new("a@b.com").unwrap();

        assert!(backend.create_lead(&lead).await.is_err());
    }
}

mod end_to_end {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Toasts(RefCell<Vec<Notice>>);

    impl Notifier for &Toasts {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[derive(Default)]
    struct Form {
        email: RefCell<String>,
        lead: Cell<SubmissionStatus>,
        order: Cell<SubmissionStatus>,
    }

    impl FormState for &Form {
        fn email(&self) -> String {
            self.email.borrow().clone()
        }
        fn set_email(&self, email: String) {
            *self.email.borrow_mut() = email;
        }
        fn lead_status(&self) -> SubmissionStatus {
            self.lead.get()
        }
        fn set_lead_status(&self, status: SubmissionStatus) {
            self.lead.set(status);
        }
        fn order_status(&self) -> SubmissionStatus {
            self.order.get()
        }
        fn set_order_status(&self, status: SubmissionStatus) {
            self.order.set(status);
        }
    }

    #[tokio::test]
    async fn lead_form_round_trip() {
        let (config, received) = serve(StatusCode::OK).await;
        let toasts = Toasts::default();
        let form = Form::default();
        *form.email.borrow_mut() = "ama@example.com".to_string();

        let ctrl = SubmissionController::new(HttpBackend::new(config), &toasts, TokioTimer, &form);
        let status = ctrl.submit_lead("ama@example.com").await;

        assert_eq!(status, SubmissionStatus::Succeeded);
        assert_eq!(form.email.borrow().as_str(), "");
        assert_eq!(form.lead.get(), SubmissionStatus::Idle);
        assert_eq!(received.leads(), vec![json!({ "email": "ama@example.com" })]);
        assert_eq!(toasts.0.borrow().len(), 1);
    }

    #[tokio::test]
    async fn email_reaches_the_api_as_typed() {
        let (config, received) = serve(StatusCode::OK).await;
        let toasts = Toasts::default();
        let form = Form::default();

        let ctrl = SubmissionController::new(HttpBackend::new(config), &toasts, TokioTimer, &form);
        ctrl.submit_lead(" ama@example.com ").await;

        assert_eq!(received.leads(), vec![json!({ "email": " ama@example.com " })]);
    }

    #[tokio::test]
    async fn failed_order_keeps_page_usable() {
        let (config, _) = serve(StatusCode::SERVICE_UNAVAILABLE).await;
        let toasts = Toasts::default();
        let form = Form::default();

        let ctrl = SubmissionController::new(HttpBackend::new(config), &toasts, TokioTimer, &form);
        let status = ctrl.purchase_tier("Premium VVIP").await;

        assert_eq!(status, SubmissionStatus::Failed);
        assert_eq!(form.order.get(), SubmissionStatus::Idle);
        let levels: Vec<NoticeLevel> = toasts.0.borrow().iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Info, NoticeLevel::Error]);
    }
}
