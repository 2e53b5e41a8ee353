// Trait definitions for dependency injection
//
// Naming convention: Base* for trait names (e.g., BaseMailer, BaseChatModel)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::approval::NotificationMessage;

// =============================================================================
// Mailer Trait (Infrastructure - outbound email delivery)
// =============================================================================

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Deliver one composed message. Exactly one attempt; callers decide
    /// what a failure means.
    async fn send(&self, message: &NotificationMessage) -> Result<()>;
}

// =============================================================================
// Chat Model Trait (Infrastructure - generative backend)
// =============================================================================

#[async_trait]
pub trait BaseChatModel: Send + Sync {
    /// Complete a user message under a system instruction (returns the
    /// backend's raw text response, unparsed)
    async fn generate(&self, system_instruction: &str, message: &str) -> Result<String>;
}
