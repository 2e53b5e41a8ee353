// Mock implementations for testing
//
// Mocks record their calls so tests can assert on outbound traffic
// (including its absence).

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domains::approval::NotificationMessage;

use super::traits::{BaseChatModel, BaseMailer};

// =============================================================================
// Mock Mailer
// =============================================================================

pub struct MockMailer {
    sent: Arc<Mutex<Vec<NotificationMessage>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A mailer whose every send attempt fails.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// All messages that were handed to `send` and accepted.
    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        if self.fail {
            anyhow::bail!("mock delivery failure");
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// =============================================================================
// Mock Chat Model
// =============================================================================

pub struct MockChatModel {
    response: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockChatModel {
    /// A model that always answers with `response`.
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A model whose every call fails (backend unreachable).
    pub fn failing() -> Self {
        Self {
            response: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All user messages that reached the model.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseChatModel for MockChatModel {
    async fn generate(&self, _system_instruction: &str, message: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(message.to_string());
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("mock backend unavailable"),
        }
    }
}
