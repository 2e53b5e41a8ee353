// Production adapters wrapping the provider client crates behind the
// kernel traits.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::GeminiClient;
use sendgrid::{Mail, SendGridClient};

use crate::domains::approval::NotificationMessage;

use super::traits::{BaseChatModel, BaseMailer};

/// The one generation model this service talks to.
const GEMINI_MODEL: &str = "models/gemini-2.0-flash";

/// SendGrid-backed mailer. Owns the verified sender address so domain
/// code never sees it.
pub struct SendGridMailer {
    client: SendGridClient,
    sender: String,
}

impl SendGridMailer {
    pub fn new(client: SendGridClient, sender: impl Into<String>) -> Self {
        Self {
            client,
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl BaseMailer for SendGridMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        let mail = Mail {
            to: message.to.clone(),
            from: self.sender.clone(),
            subject: message.subject.clone(),
            text: message.body.clone(),
        };

        self.client
            .send(&mail)
            .await
            .context("SendGrid delivery failed")
    }
}

/// Gemini-backed chat model, pinned to one generation model.
pub struct GeminiChat {
    client: GeminiClient,
}

impl GeminiChat {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseChatModel for GeminiChat {
    async fn generate(&self, system_instruction: &str, message: &str) -> Result<String> {
        self.client
            .generate_content(GEMINI_MODEL, Some(system_instruction), message)
            .await
            .context("Gemini call failed")
    }
}
