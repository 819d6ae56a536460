//! Input validation for contact submissions.
//!
//! The browser's `required` attributes already block empty fields; these
//! checks repeat them on the server and bound field sizes before anything is
//! forwarded to the form endpoint.

use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// Validation error types for contact field failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field} has an invalid format: expected {expected}")]
    InvalidFormat {
        field: &'static str,
        expected: &'static str,
    },
}

/// A contact message whose fields have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// # Errors
    ///
    /// Returns the first failing field's [`ValidationError`].
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_required("Name", name, MAX_NAME_LEN)?.to_owned(),
            email: validate_email(email)?,
            message: validate_required("Message", message, MAX_MESSAGE_LEN)?.to_owned(),
        })
    }
}

/// Trims `input` and checks it is non-empty and at most `max_len` characters.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] or [`ValidationError::TooLong`].
pub fn validate_required<'a>(
    field: &'static str,
    input: &'a str,
    max_len: usize,
) -> Result<&'a str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max_len {
        return Err(ValidationError::TooLong {
            field,
            max: max_len,
            actual,
        });
    }
    Ok(trimmed)
}

/// Email shape check matching the browser's `type="email"` rule: one `@`,
/// a non-empty local part, and a domain of non-empty dot-separated labels.
/// A dotless domain such as `user@localhost` is accepted, as browsers do.
///
/// Returns the trimmed address with only the domain lowercased; the local
/// part may be case-sensitive and is kept as typed.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the address is empty, too long or
/// malformed.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    const FIELD: &str = "Email";
    let trimmed = validate_required(FIELD, input, MAX_EMAIL_LEN)?;

    let invalid = ValidationError::InvalidFormat {
        field: FIELD,
        expected: "an address like name@example.com",
    };
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(invalid);
    };
    if local.is_empty()
        || domain.contains('@')
        || trimmed.chars().any(char::is_whitespace)
        || domain.split('.').any(str::is_empty)
    {
        return Err(invalid);
    }
    Ok(format!("{local}@{}", domain.to_lowercase()))
}
