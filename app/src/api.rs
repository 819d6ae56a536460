//! Server functions exposed to the page.
//!
//! The site has a single one, `contact`, which validates a contact-form
//! submission and forwards it to the configured form endpoint. There is no
//! retry: the visitor sees the failure and can resend.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;

use crate::validation::{ContactSubmission, ValidationError};

/// Contact form submission data.
///
/// # Security
/// - The `website` field acts as a honeypot to detect automated bots.
///   Legitimate users (with browsers) won't see or fill this field.
/// - If `website` is not empty, the submission is dropped without being
///   forwarded.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot field - should be empty for legitimate submissions.
    #[serde(default)]
    pub website: Option<String>,
}

impl ContactRequest {
    /// Whether every required field has content. Mirrors the inputs'
    /// `required` attributes so an incomplete form is never dispatched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.website.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// # Errors
    ///
    /// Returns the first failing field's [`ValidationError`].
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        ContactSubmission::new(&self.name, &self.email, &self.message)
    }
}

/// Handles contact form submissions by forwarding them to the form endpoint.
///
/// # Returns
///
/// `Ok(())` when the endpoint accepted the message (or the honeypot tripped),
/// otherwise a `ServerFnError` describing the validation or delivery failure.
#[server(endpoint = "/contact")]
pub async fn contact(data: ContactRequest) -> Result<(), ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    if data.is_bot() {
        tracing::warn!("Contact form rejected: honeypot field was filled (likely bot)");
        // Report success so the bot has nothing to adapt to.
        return Ok(());
    }

    let submission = data.validate().map_err(|err| {
        tracing::warn!(error = %err, "Contact form failed validation");
        ServerFnError::<NoCustomError>::ServerError(err.to_string())
    })?;

    let AppState { contact_form, .. } = expect_context::<AppState>();
    contact_form.submit(&submission).await.map_err(|err| {
        tracing::error!(error = %err, "Failed to deliver contact message");
        ServerFnError::<NoCustomError>::ServerError(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Loved the two-stream write-up.".to_string(),
            website: None,
        }
    }

    /// Verifies the default state of a `ContactRequest`.
    #[test]
    fn test_contact_request_default() {
        let request = ContactRequest::default();
        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert_eq!(request.message, "");
        assert_eq!(request.website, None);
        assert!(!request.is_complete());
    }

    #[test]
    fn test_is_complete_requires_every_field() {
        assert!(filled().is_complete());

        let no_message = ContactRequest {
            message: "   ".to_string(),
            ..filled()
        };
        assert!(!no_message.is_complete());

        let no_email = ContactRequest {
            email: String::new(),
            ..filled()
        };
        assert!(!no_email.is_complete());
    }

    #[test]
    fn test_honeypot_detection() {
        assert!(!filled().is_bot());
        assert!(
            !ContactRequest {
                website: Some(String::new()),
                ..filled()
            }
            .is_bot()
        );
        assert!(
            ContactRequest {
                website: Some("http://spam.example".to_string()),
                ..filled()
            }
            .is_bot()
        );
    }

    #[test]
    fn test_validate_produces_submission() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
    }

    /// Confirms that `ContactRequest` serializes and deserializes correctly,
    /// and that the honeypot may be omitted on the wire.
    #[test]
    fn test_contact_request_serialization() {
        let request = filled();
        let serialized = serde_json::to_string(&request).unwrap();
        let deserialized: ContactRequest = serde_json::from_str(&serialized).unwrap();
        assert_eq!(request, deserialized);

        let without_honeypot: ContactRequest =
            serde_json::from_str(r#"{"name":"a","email":"b@c.de","message":"m"}"#).unwrap();
        assert_eq!(without_honeypot.website, None);
    }

    /// Ensures the server function keeps its signature.
    #[test]
    fn test_server_fn_signatures() {
        let _: fn(ContactRequest) -> _ = contact;
    }
}
