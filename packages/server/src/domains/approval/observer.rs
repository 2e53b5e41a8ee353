//! Change observer - orchestrates detect -> compose -> dispatch for one
//! change event.
//!
//! Every failure is absorbed here. The trigger platform's only recovery
//! mechanism is redelivery, and redelivery is not safe once an email may
//! already have left, so nothing in this pipeline propagates an error to
//! the caller.

use tracing::{error, info};

use crate::kernel::BaseMailer;

use super::composer::{compose, ComposeError};
use super::models::{ApprovalRecord, TransitionOutcome};
use super::transition::detect;

/// What handling one change event amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// No notifiable transition; nothing was attempted.
    Ignored,
    /// The notification email was accepted by the delivery provider.
    Sent,
    /// A notifiable transition without a recipient; no delivery attempted.
    RecipientMissing,
    /// The single delivery attempt failed. Not retried.
    DeliveryFailed,
}

/// Handle one before/after pair for an `event_letters` document.
///
/// At most one outbound delivery call is made per invocation.
pub async fn handle_letter_change(
    doc_id: &str,
    before: Option<&ApprovalRecord>,
    after: Option<&ApprovalRecord>,
    mailer: &dyn BaseMailer,
) -> ChangeOutcome {
    let transition = match detect(before, after) {
        TransitionOutcome::NoTransition => return ChangeOutcome::Ignored,
        TransitionOutcome::Notifiable(transition) => transition,
    };

    let message = match compose(&transition) {
        Ok(message) => message,
        Err(ComposeError::MissingRecipient) => {
            error!(doc_id = %doc_id, "User email missing");
            return ChangeOutcome::RecipientMissing;
        }
    };

    match mailer.send(&message).await {
        Ok(()) => {
            info!(doc_id = %doc_id, to = %message.to, "Approval email sent");
            ChangeOutcome::Sent
        }
        Err(e) => {
            error!(doc_id = %doc_id, error = %e, "Approval email delivery failed");
            ChangeOutcome::DeliveryFailed
        }
    }
}
