//! Contact-form submission behind a narrow relay interface.
//!
//! The form UI only sees `submit(fields) -> success/failure`; the EmailJS
//! wire format stays in here so the relay could be swapped without touching
//! the component.

use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Delay before a success notice auto-reverts to the idle state.
pub const SUCCESS_NOTICE_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// All four fields are required; whitespace-only values do not count.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("all fields are required")]
    Incomplete,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay rejected submission with status {0}")]
    Rejected(u16),
}

/// Submission lifecycle of the contact form. `Error` does not auto-clear; it
/// is superseded by the next submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// What the form does with a finished submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub phase: SubmitPhase,
    pub clear_fields: bool,
}

/// Successful delivery clears the form and shows the success notice; failure
/// keeps what the visitor typed and shows a persistent error instead.
pub fn settle_submission(result: Result<(), RelayError>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome {
            phase: SubmitPhase::Success,
            clear_fields: true,
        },
        Err(_) => SubmitOutcome {
            phase: SubmitPhase::Error(
                "Failed to send message. Please try again later.".to_string(),
            ),
            clear_fields: false,
        },
    }
}

/// The auto-dismiss timer only retires the success notice; if the form has
/// already moved on to another attempt, the timer leaves it alone.
pub fn dismissed_phase(current: SubmitPhase) -> SubmitPhase {
    match current {
        SubmitPhase::Success => SubmitPhase::Idle,
        other => other,
    }
}

pub trait EmailRelay {
    fn submit(
        &self,
        fields: &ContactFields,
    ) -> impl std::future::Future<Output = Result<(), RelayError>>;
}

/// EmailJS request envelope. `user_id` is what EmailJS calls the public key.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

#[derive(Debug, Clone)]
pub struct EmailJs {
    config: RelayConfig,
}

impl EmailJs {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    fn request<'a>(&'a self, fields: &'a ContactFields) -> SendRequest<'a> {
        SendRequest {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: fields,
        }
    }
}

impl EmailRelay for EmailJs {
    /// Single best-effort call; no retry, no queuing.
    async fn submit(&self, fields: &ContactFields) -> Result<(), RelayError> {
        if !fields.is_complete() {
            return Err(RelayError::Incomplete);
        }
        let response = reqwest::Client::new()
            .post(EMAILJS_ENDPOINT)
            .json(&self.request(fields))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Interested in collaborating.".into(),
        }
    }

    #[test]
    fn complete_fields_validate() {
        assert!(fields().is_complete());
    }

    #[test]
    fn blank_or_whitespace_fields_do_not_validate() {
        assert!(!ContactFields::default().is_complete());
        let mut f = fields();
        f.subject = "   ".into();
        assert!(!f.is_complete());
    }

    #[test]
    fn request_envelope_matches_the_emailjs_wire_format() {
        let relay = EmailJs::new(RelayConfig {
            service_id: "service_test",
            template_id: "template_test",
            public_key: "pk_test",
        });
        let f = fields();
        let value = serde_json::to_value(relay.request(&f)).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "pk_test",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Hello",
                    "message": "Interested in collaborating.",
                }
            })
        );
    }

    #[test]
    fn successful_submission_clears_the_form_and_shows_success() {
        let outcome = settle_submission(Ok(()));
        assert!(outcome.clear_fields);
        assert_eq!(outcome.phase, SubmitPhase::Success);
    }

    #[test]
    fn failed_submission_keeps_the_form_with_a_persistent_error() {
        let rejected = settle_submission(Err(RelayError::Rejected(502)));
        assert!(!rejected.clear_fields);
        assert!(matches!(rejected.phase, SubmitPhase::Error(_)));

        let offline = settle_submission(Err(RelayError::Transport("offline".into())));
        assert!(!offline.clear_fields);
        assert!(matches!(offline.phase, SubmitPhase::Error(_)));
    }

    #[test]
    fn dismiss_only_retires_the_success_notice() {
        assert_eq!(dismissed_phase(SubmitPhase::Success), SubmitPhase::Idle);
        assert_eq!(
            dismissed_phase(SubmitPhase::Submitting),
            SubmitPhase::Submitting
        );
        let err = SubmitPhase::Error("failed".to_string());
        assert_eq!(dismissed_phase(err.clone()), err);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(RelayError::Incomplete.to_string(), "all fields are required");
        assert_eq!(
            RelayError::Rejected(502).to_string(),
            "relay rejected submission with status 502"
        );
    }
}
