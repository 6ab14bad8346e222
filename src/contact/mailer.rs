use async_trait::async_trait;
use aws_sdk_ses::Client as SesClient;
use aws_sdk_ses::error::DisplayErrorContext;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

use crate::core::models::OutboundEmail;
use crate::errors::BackendError;

const CHARSET: &str = "UTF-8";

#[async_trait]
pub trait Mailer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error carrying the mail service's message text when the send is rejected.
    async fn send(&self, email: &OutboundEmail) -> Result<(), BackendError>;
}

pub struct SesMailer {
    client: SesClient,
}

impl SesMailer {
    #[must_use]
    pub fn new(shared: &aws_config::SdkConfig) -> Self {
        Self {
            client: SesClient::new(shared),
        }
    }
}

fn utf8_content(data: &str) -> Result<Content, BackendError> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| BackendError::AwsError(format!("ses content: {e}")))
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), BackendError> {
        let message = Message::builder()
            .subject(utf8_content(&email.subject)?)
            .body(
                Body::builder()
                    .text(utf8_content(&email.text_body)?)
                    .html(utf8_content(&email.html_body)?)
                    .build(),
            )
            .build();

        let destination = Destination::builder()
            .set_to_addresses(Some(email.to_addresses.clone()))
            .build();

        self.client
            .send_email()
            .source(&email.source)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| BackendError::AwsError(format!("{}", DisplayErrorContext(&e))))?;
        Ok(())
    }
}

/// Ordered `(needle, label)` rules matched case-insensitively against a send
/// failure's text. The first hit wins.
pub const SEND_FAILURE_RULES: &[(&str, &str)] = &[
    ("not verified", "sender not verified"),
    ("sandbox", "ses sandbox mode"),
    ("quota", "ses quota exceeded"),
];

pub const GENERIC_SEND_FAILURE: &str = "ses send failed";

/// Label for the error body of a failed send.
#[must_use]
pub fn classify_send_failure(error_text: &str) -> &'static str {
    let lowered = error_text.to_lowercase();
    SEND_FAILURE_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map_or(GENERIC_SEND_FAILURE, |(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_failures() {
        assert_eq!(
            classify_send_failure("Email address is not verified. The following identities failed"),
            "sender not verified"
        );
        assert_eq!(
            classify_send_failure("Account is in SANDBOX mode"),
            "ses sandbox mode"
        );
        assert_eq!(
            classify_send_failure("Daily message Quota exceeded"),
            "ses quota exceeded"
        );
        assert_eq!(classify_send_failure("connection reset"), GENERIC_SEND_FAILURE);
    }

    #[test]
    fn rule_order_decides_overlaps() {
        assert_eq!(
            classify_send_failure("sandbox: recipient not verified"),
            "sender not verified"
        );
        assert_eq!(
            classify_send_failure("sandbox quota reached"),
            "ses sandbox mode"
        );
    }
}
