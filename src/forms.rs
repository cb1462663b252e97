//! Form submission handling
//!
//! Nothing is transmitted: submissions are logged and acknowledged.

use std::collections::BTreeMap;

use serde::Serialize;

/// Named field values of a submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field. Repeated names keep the last value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

/// What the page does after the generic form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Blocking dialog text
    pub message: String,
    /// Reset every field of the form
    pub reset: bool,
}

/// Accept a generic form submission
pub fn submit_form(submission: &FormSubmission, message: &str) -> Acknowledgement {
    log::info!("Form submitted: {}", submission.to_json());
    Acknowledgement {
        message: message.to_string(),
        reset: true,
    }
}

/// Outcome of a newsletter sign-up attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterOutcome {
    /// Show the message once and clear the email field
    Acknowledged { message: String },
    /// Empty email: no dialog, field untouched
    Ignored,
}

pub fn submit_newsletter(email: &str, message: &str) -> NewsletterOutcome {
    if email.is_empty() {
        log::debug!("Newsletter submit with empty email ignored");
        return NewsletterOutcome::Ignored;
    }
    log::info!("Newsletter sign-up received");
    NewsletterOutcome::Acknowledged {
        message: message.to_string(),
    }
}
