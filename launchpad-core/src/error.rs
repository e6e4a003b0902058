//! The one failure the page distinguishes.

use thiserror::Error;

/// A lead or order did not make it to the backend.
///
/// Network failures and non-2xx responses are not told apart; the detail is
/// only for the diagnostic trace.
#[derive(Debug, Error)]
#[error("submission failed: {detail}")]
pub struct SubmissionError {
    detail: String,
}

impl SubmissionError {
    /// Wrap a human-readable reason.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Reason recorded when the submission failed.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::new(format!("backend answered {status}")),
            None => Self::new(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_detail() {
        let err = SubmissionError::new("connection refused");
        assert_eq!(err.detail(), "connection refused");
        assert_eq!(err.to_string(), "submission failed: connection refused");
    }
}
