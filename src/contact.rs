//! Contact-form domain: the message draft, the submission status flow,
//! and the outbound delivery through a transactional-email relay.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a settled submission status stays on screen before the form
/// returns to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

/// The three fields collected by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// A message is deliverable only when every field has content.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactError::Incomplete);
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone)]
pub enum ContactError {
    #[error("message is missing required fields")]
    Incomplete,
    #[error("couldn't reach the mail relay: {0}")]
    Network(String),
    #[error("mail relay rejected the message: {0}")]
    Rejected(String),
}

/// Submission lifecycle of the contact form. One attempt at a time; a
/// settled status resets to idle after [`STATUS_RESET_DELAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmitStatus {
    /// Duplicate submissions are blocked while an attempt is in flight.
    pub fn can_submit(self) -> bool {
        self != SubmitStatus::Pending
    }

    /// Maps a relay outcome onto the settled status.
    pub fn settle<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => SubmitStatus::Success,
            Err(_) => SubmitStatus::Error,
        }
    }

    /// Only a successful delivery clears the draft; a failed attempt
    /// keeps it for resubmission.
    pub fn clears_draft(self) -> bool {
        self == SubmitStatus::Success
    }
}

/// Outbound transport for contact messages. Narrow on purpose so tests
/// can swap in a deterministic relay.
#[cfg(feature = "ssr")]
pub trait Relay {
    fn deliver(
        &self,
        message: &ContactMessage,
    ) -> impl std::future::Future<Output = Result<(), ContactError>> + Send;
}

/// Validates then hands the message to the relay. Single attempt, no
/// retry; the caller maps the outcome with [`SubmitStatus::settle`].
#[cfg(feature = "ssr")]
pub async fn deliver_message(
    relay: &impl Relay,
    message: &ContactMessage,
) -> Result<(), ContactError> {
    message.validate()?;
    relay.deliver(message).await
}

#[cfg(feature = "ssr")]
pub use relay::{EmailRelay, RelayConfig};

#[cfg(feature = "ssr")]
mod relay {
    use super::{ContactError, ContactMessage, Relay};
    use serde::Serialize;

    const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
    const DEFAULT_SERVICE_ID: &str = "service_p683g2m";
    const DEFAULT_TEMPLATE_ID: &str = "template_c0j7b4q";
    const DEFAULT_PUBLIC_KEY: &str = "qiYXm_ZLUOptlu037";

    /// Relay credentials, overridable per deployment via environment.
    #[derive(Debug, Clone)]
    pub struct RelayConfig {
        pub endpoint: String,
        pub service_id: String,
        pub template_id: String,
        pub public_key: String,
    }

    impl RelayConfig {
        pub fn from_env() -> Self {
            let var = |name: &str, default: &str| {
                std::env::var(name).unwrap_or_else(|_| default.to_string())
            };
            Self {
                endpoint: var("CONTACT_RELAY_ENDPOINT", DEFAULT_ENDPOINT),
                service_id: var("CONTACT_RELAY_SERVICE_ID", DEFAULT_SERVICE_ID),
                template_id: var("CONTACT_RELAY_TEMPLATE_ID", DEFAULT_TEMPLATE_ID),
                public_key: var("CONTACT_RELAY_PUBLIC_KEY", DEFAULT_PUBLIC_KEY),
            }
        }
    }

    /// Request body the email service expects; the message fields become
    /// the template parameters.
    #[derive(Debug, Serialize)]
    pub(super) struct RelayPayload<'a> {
        pub service_id: &'a str,
        pub template_id: &'a str,
        pub user_id: &'a str,
        pub template_params: &'a ContactMessage,
    }

    pub struct EmailRelay {
        config: RelayConfig,
        client: reqwest::Client,
    }

    impl EmailRelay {
        pub fn new(config: RelayConfig) -> Self {
            Self {
                config,
                client: reqwest::Client::new(),
            }
        }

        pub fn from_env() -> Self {
            Self::new(RelayConfig::from_env())
        }
    }

    impl Relay for EmailRelay {
        async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
            let payload = RelayPayload {
                service_id: &self.config.service_id,
                template_id: &self.config.template_id,
                user_id: &self.config.public_key,
                template_params: message,
            };
            let res = self
                .client
                .post(&self.config.endpoint)
                .json(&payload)
                .send()
                .await
                .map_err(|e| ContactError::Network(e.to_string()))?;
            if res.status() != http::StatusCode::OK {
                let body = res.text().await.unwrap_or_default();
                return Err(ContactError::Rejected(body));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_message() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        for field in ["name", "email", "message"] {
            let mut msg = draft();
            match field {
                "name" => msg.name = "   ".to_string(),
                "email" => msg.email = String::new(),
                _ => msg.message = "\n".to_string(),
            }
            assert!(
                matches!(msg.validate(), Err(ContactError::Incomplete)),
                "blank {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_submit_guard_blocks_only_pending() {
        assert!(SubmitStatus::Idle.can_submit());
        assert!(!SubmitStatus::Pending.can_submit());
        assert!(SubmitStatus::Success.can_submit());
        assert!(SubmitStatus::Error.can_submit());
    }

    #[test]
    fn test_settle_is_total() {
        // A settled attempt is never left pending.
        let ok: Result<(), ContactError> = Ok(());
        let err: Result<(), ContactError> = Err(ContactError::Network("down".to_string()));
        assert_eq!(SubmitStatus::settle(&ok), SubmitStatus::Success);
        assert_eq!(SubmitStatus::settle(&err), SubmitStatus::Error);
    }

    #[test]
    fn test_only_success_clears_draft() {
        assert!(SubmitStatus::Success.clears_draft());
        assert!(!SubmitStatus::Error.clears_draft());
        assert!(!SubmitStatus::Idle.clears_draft());
        assert!(!SubmitStatus::Pending.clears_draft());
    }

    #[test]
    fn test_status_reset_delay() {
        assert_eq!(STATUS_RESET_DELAY, Duration::from_secs(5));
    }
}

#[cfg(all(test, feature = "ssr"))]
mod relay_tests {
    use super::relay::RelayPayload;
    use super::*;

    /// Relay that settles deterministically without touching the network.
    struct MockRelay {
        succeed: bool,
    }

    impl Relay for MockRelay {
        async fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            if self.succeed {
                Ok(())
            } else {
                Err(ContactError::Rejected("mock rejection".to_string()))
            }
        }
    }

    fn draft() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolving_relay_settles_to_success() {
        let result = deliver_message(&MockRelay { succeed: true }, &draft()).await;
        assert_eq!(SubmitStatus::settle(&result), SubmitStatus::Success);
    }

    #[tokio::test]
    async fn test_rejecting_relay_settles_to_error_and_keeps_draft() {
        let msg = draft();
        let result = deliver_message(&MockRelay { succeed: false }, &msg).await;
        let status = SubmitStatus::settle(&result);
        assert_eq!(status, SubmitStatus::Error);
        // The draft is untouched by a failed attempt.
        assert!(!status.clears_draft());
        assert_eq!(msg, draft());
    }

    #[tokio::test]
    async fn test_incomplete_message_never_reaches_relay() {
        let msg = ContactMessage::default();
        let result = deliver_message(&MockRelay { succeed: true }, &msg).await;
        assert!(matches!(result, Err(ContactError::Incomplete)));
    }

    #[test]
    fn test_relay_payload_shape() {
        let msg = draft();
        let payload = RelayPayload {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "key_z",
            template_params: &msg,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_y");
        assert_eq!(json["user_id"], "key_z");
        assert_eq!(json["template_params"]["name"], "Ada Lovelace");
        assert_eq!(json["template_params"]["email"], "ada@example.com");
        assert_eq!(json["template_params"]["message"], "Hello!");
    }
}
