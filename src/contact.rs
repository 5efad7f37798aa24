use http::{header::ACCEPT, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form submission endpoint, overridable at build time with `CONTACT_FORM_ENDPOINT`.
pub const CONTACT_ENDPOINT: &str = match option_env!("CONTACT_FORM_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://formspree.io/f/contact",
};

pub const SUCCESS_MESSAGE: &str = "Thanks for your message! I'll get back to you soon.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0}")]
    Rejected(String),
    #[error("Oops! There was a problem submitting your form")]
    Unexpected,
    #[error("Oops! There was a problem submitting your form")]
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(s) | Self::Error(s) => Some(s.as_str()),
            Self::Idle | Self::Submitting => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmissionStatus,
}

impl ContactForm {
    /// Moves to `Submitting` and hands back the body to send, unless a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.status.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn finish(&mut self, result: Result<String, ContactError>) {
        match result {
            Ok(msg) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmissionStatus::Success(msg);
            }
            Err(e) => {
                self.status = SubmissionStatus::Error(e.to_string());
            }
        }
    }
}

#[derive(Deserialize)]
struct FieldError {
    message: String,
}

#[derive(Deserialize)]
struct FailureBody {
    #[serde(default)]
    errors: Vec<FieldError>,
    #[serde(default)]
    error: Option<String>,
}

/// Maps an endpoint response onto the message shown under the form.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<String, ContactError> {
    if status.is_success() {
        return Ok(SUCCESS_MESSAGE.to_string());
    }
    log::warn!("contact endpoint answered {status}");
    match serde_json::from_str::<FailureBody>(body) {
        Ok(FailureBody { errors, .. }) if !errors.is_empty() => Err(ContactError::Rejected(
            errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(", "),
        )),
        Ok(FailureBody {
            error: Some(error), ..
        }) => Err(ContactError::Rejected(error)),
        _ => Err(ContactError::Unexpected),
    }
}

pub async fn submit(endpoint: &str, payload: &ContactPayload) -> Result<String, ContactError> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .header(ACCEPT, "application/json")
        .json(payload)
        .send()
        .await
        .map_err(|e| {
            log::warn!("contact submission failed: {e}");
            ContactError::Network
        })?;
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|e| {
        log::warn!("couldn't read contact response body: {e}");
        String::new()
    });
    interpret_response(status, &body)
}
