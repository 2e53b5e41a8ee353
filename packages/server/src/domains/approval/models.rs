use serde::{Deserialize, Serialize};

/// Decision state of an event-letter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// A terminal approval decision. Only these two statuses are worth
/// notifying about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

/// Snapshot of one event-letter record as delivered by the change trigger.
///
/// Read-only from this service's perspective; the record is created and
/// mutated elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub event_name: Option<String>,
}

/// Result of comparing a before/after snapshot pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    NoTransition,
    Notifiable(NotifiableTransition),
}

/// A status change that ends in a terminal decision and differs from the
/// prior status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifiableTransition {
    pub decision: Decision,
    pub user_email: Option<String>,
    pub event_name: Option<String>,
}

/// Ephemeral email payload handed to the mailer. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}
