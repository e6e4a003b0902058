//! The backend seam and the HTTP client that implements it.
//!
//! The backend itself is an external service. Only two endpoints are used:
//!
//! - `POST {base}/api/leads`  with `{ "email": string }`
//! - `POST {base}/api/orders` with `{ "tier": string, "amount": number }`
//!
//! Any 2xx counts as success; response bodies are not read.

use std::future::Future;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::SubmissionError;
use crate::model::{LeadSubmission, OrderRequest};

/// Where leads and orders go.
pub trait Backend {
    /// Record a lead. Resolves once the backend has answered.
    fn create_lead(
        &self,
        lead: &LeadSubmission,
    ) -> impl Future<Output = Result<(), SubmissionError>>;

    /// Record an order. Resolves once the backend has answered.
    fn create_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// [`Backend`] over HTTP, usable from native code and from the browser.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    /// Client for the API described by `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn post<T>(&self, path: &str, body: &T) -> Result<(), SubmissionError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.config.api_url(path);
        debug!(%url, "POST");

        self.client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

impl Backend for HttpBackend {
    async fn create_lead(&self, lead: &LeadSubmission) -> Result<(), SubmissionError> {
        self.post("leads", lead).await
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<(), SubmissionError> {
        self.post("orders", order).await
    }
}
