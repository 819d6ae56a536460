//! Runtime configuration for outbound contact delivery, read from the
//! environment (optionally seeded from `.env` by the server binary).

use std::time::Duration;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/movzlkwy";
pub const DEFAULT_FORM_SUBJECT: &str = "New message from portfolio";
pub const DEFAULT_FORM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// Form-ingestion URL every submission is posted to.
    pub endpoint: String,
    /// Value of the fixed `_subject` field.
    pub subject: String,
    pub timeout: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FORM_ENDPOINT.to_owned(),
            subject: DEFAULT_FORM_SUBJECT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_FORM_TIMEOUT_SECS),
        }
    }
}

impl ContactConfig {
    /// Reads `CONTACT_FORM_ENDPOINT`, `CONTACT_FORM_SUBJECT` and
    /// `CONTACT_FORM_TIMEOUT_SECS`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], with the variable source injected.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout = non_empty("CONTACT_FORM_TIMEOUT_SECS")
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid CONTACT_FORM_TIMEOUT_SECS");
                    None
                }
            })
            .unwrap_or(defaults.timeout);

        Self {
            endpoint: non_empty("CONTACT_FORM_ENDPOINT").unwrap_or(defaults.endpoint),
            subject: non_empty("CONTACT_FORM_SUBJECT").unwrap_or(defaults.subject),
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ContactConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ContactConfig::default());
        assert_eq!(config.endpoint, "https://formspree.io/f/movzlkwy");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ContactConfig::from_lookup(lookup(&[
            ("CONTACT_FORM_ENDPOINT", "https://forms.example.com/f/abc"),
            ("CONTACT_FORM_SUBJECT", "Hola"),
            ("CONTACT_FORM_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.endpoint, "https://forms.example.com/f/abc");
        assert_eq!(config.subject, "Hola");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = ContactConfig::from_lookup(lookup(&[
            ("CONTACT_FORM_ENDPOINT", "   "),
            ("CONTACT_FORM_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_FORM_TIMEOUT_SECS));

        let zero = ContactConfig::from_lookup(lookup(&[("CONTACT_FORM_TIMEOUT_SECS", "0")]));
        assert_eq!(zero.timeout, Duration::from_secs(DEFAULT_FORM_TIMEOUT_SECS));
    }
}
