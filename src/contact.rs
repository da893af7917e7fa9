#[cfg(feature = "ssr")]
pub mod relay;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the success / failure popup stays up before the form goes idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn from_result<T, E>(res: &Result<T, E>) -> Self {
        if res.is_ok() {
            Self::Sent
        } else {
            Self::Failed
        }
    }

    pub fn is_sending(self) -> bool {
        self == Self::Sending
    }

    /// Whether this status should fall back to idle after [`STATUS_RESET_DELAY`].
    pub fn resets(self) -> bool {
        matches!(self, Self::Sent | Self::Failed)
    }

    pub fn button_label(self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("Message sent successfully! I'll get back to you soon."),
            Self::Failed => Some("Something went wrong. Please try again later."),
            Self::Idle | Self::Sending => None,
        }
    }
}

#[derive(Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorItem>,
}

#[derive(Deserialize)]
struct RelayErrorItem {
    message: String,
}

/// Pull the first error message out of a form relay's JSON error body.
pub fn rejection_reason(body: &str) -> Option<String> {
    serde_json::from_str::<RelayErrorBody>(body)
        .ok()?
        .errors
        .into_iter()
        .map(|e| e.message)
        .next()
}
