//! Minimal SendGrid v3 mail-send client.
//!
//! One endpoint, one content type: plain-text mail via
//! `POST /v3/mail/send`. SendGrid answers `202 Accepted` on success
//! with an empty body.

pub mod models;

use reqwest::Client;
use thiserror::Error;
use tracing::warn;

pub use models::Mail;
use models::MailSendRequest;

/// Result type for SendGrid client operations.
pub type Result<T> = std::result::Result<T, SendGridError>;

/// SendGrid client errors.
#[derive(Debug, Error)]
pub enum SendGridError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response from SendGrid)
    #[error("SendGrid API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// SendGrid v3 API client.
#[derive(Clone)]
pub struct SendGridClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl SendGridClient {
    /// Create a new SendGrid client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.sendgrid.com/v3".to_string(),
        }
    }

    /// Set a custom base URL (for test servers, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Send a single plain-text email.
    ///
    /// The `from` address must be a sender verified with SendGrid or the
    /// API rejects the request.
    pub async fn send(&self, mail: &Mail) -> Result<()> {
        let body = MailSendRequest::from(mail);

        let response = self
            .http_client
            .post(format!("{}/mail/send", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "SendGrid request failed");
                SendGridError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_body, "SendGrid API error");
            return Err(SendGridError::Api {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = SendGridClient::new("SG.test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "SG.test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[test]
    fn test_mail_send_request_shape() {
        let mail = Mail {
            to: "a@b.com".to_string(),
            from: "sender@example.org".to_string(),
            subject: "Hello".to_string(),
            text: "World".to_string(),
        };

        let value = serde_json::to_value(MailSendRequest::from(&mail)).unwrap();

        assert_eq!(value["personalizations"][0]["to"][0]["email"], "a@b.com");
        assert_eq!(value["from"]["email"], "sender@example.org");
        assert_eq!(value["subject"], "Hello");
        assert_eq!(value["content"][0]["type"], "text/plain");
        assert_eq!(value["content"][0]["value"], "World");
    }

    #[tokio::test]
    #[ignore] // Requires a real SendGrid API key and verified sender
    async fn test_send_mail() {
        let api_key = std::env::var("SENDGRID_API_KEY").expect("SENDGRID_API_KEY not set");
        let from = std::env::var("SENDGRID_TEST_SENDER").expect("SENDGRID_TEST_SENDER not set");

        let client = SendGridClient::new(api_key);
        let result = client
            .send(&Mail {
                to: from.clone(),
                from,
                subject: "sendgrid-rs test".to_string(),
                text: "test message".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }
}
