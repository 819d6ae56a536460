//! Outbound delivery of contact messages to the third-party form endpoint.
//!
//! One submission is one POST: a multipart body with the visitor's fields
//! plus a fixed `_subject`, sent with `Accept: application/json`. Only the
//! status code is interpreted; the response body is ignored.

use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::ContactConfig;
use crate::validation::ContactSubmission;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("form endpoint unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("form endpoint rejected the submission with status {0}")]
    Rejected(StatusCode),
}

#[derive(Debug, Clone)]
pub struct FormClient {
    http: Client,
    endpoint: String,
    subject: String,
}

impl FormClient {
    /// # Errors
    ///
    /// Returns [`FormError::Client`] if the TLS backend cannot be initialised.
    pub fn new(config: &ContactConfig) -> Result<Self, FormError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FormError::Client)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            subject: config.subject.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form(&self, submission: &ContactSubmission) -> Form {
        Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("message", submission.message.clone())
            .text("_subject", self.subject.clone())
    }

    /// Posts one submission. No retry: a failure is reported to the visitor,
    /// who can resend or write an email instead.
    ///
    /// # Errors
    ///
    /// [`FormError::Transport`] when the request could not be completed,
    /// [`FormError::Rejected`] for any non-2xx response.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), FormError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(self.form(submission))
            .send()
            .await
            .map_err(FormError::Transport)?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, endpoint = %self.endpoint, "Contact message delivered");
            Ok(())
        } else {
            tracing::warn!(%status, endpoint = %self.endpoint, "Form endpoint rejected contact message");
            Err(FormError::Rejected(status))
        }
    }
}
