//! Message composition for notifiable transitions.

use thiserror::Error;

use super::models::{Decision, NotifiableTransition, NotificationMessage};

/// Placeholder used when the record carries no event name.
const FALLBACK_EVENT_NAME: &str = "your event";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// The record has no user email; a message cannot exist without a
    /// recipient.
    #[error("user email missing from approval record")]
    MissingRecipient,
}

/// Build the notification email for a transition.
///
/// Deterministic: subject and body depend only on the decision and the
/// event name.
pub fn compose(transition: &NotifiableTransition) -> Result<NotificationMessage, ComposeError> {
    let to = transition
        .user_email
        .as_deref()
        .filter(|email| !email.is_empty())
        .ok_or(ComposeError::MissingRecipient)?;

    let event_name = transition
        .event_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_EVENT_NAME);

    let (subject, body) = match transition.decision {
        Decision::Approved => (
            "Your Event Letter Has Been Approved",
            format!("Your request for \"{}\" has been approved.", event_name),
        ),
        Decision::Rejected => (
            "Your Event Letter Has Been Rejected",
            format!("Your request for \"{}\" has been rejected.", event_name),
        ),
    };

    Ok(NotificationMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(decision: Decision) -> NotifiableTransition {
        NotifiableTransition {
            decision,
            user_email: Some("a@b.com".to_string()),
            event_name: Some("Hack Night".to_string()),
        }
    }

    #[test]
    fn test_approved_message() {
        let message = compose(&transition(Decision::Approved)).unwrap();

        assert_eq!(message.to, "a@b.com");
        assert_eq!(message.subject, "Your Event Letter Has Been Approved");
        assert!(message.body.contains("Hack Night"));
        assert_eq!(
            message.body,
            "Your request for \"Hack Night\" has been approved."
        );
    }

    #[test]
    fn test_rejected_message() {
        let message = compose(&transition(Decision::Rejected)).unwrap();

        assert_eq!(message.subject, "Your Event Letter Has Been Rejected");
        assert!(message.body.contains("rejected"));
    }

    #[test]
    fn test_missing_event_name_falls_back() {
        let mut t = transition(Decision::Approved);
        t.event_name = None;

        let message = compose(&t).unwrap();

        assert!(message.body.contains("your event"));
    }

    #[test]
    fn test_empty_event_name_falls_back() {
        let mut t = transition(Decision::Approved);
        t.event_name = Some(String::new());

        let message = compose(&t).unwrap();

        assert!(message.body.contains("your event"));
    }

    #[test]
    fn test_missing_recipient_is_rejected() {
        let mut t = transition(Decision::Approved);
        t.user_email = None;

        assert_eq!(compose(&t), Err(ComposeError::MissingRecipient));
    }

    #[test]
    fn test_empty_recipient_is_rejected() {
        let mut t = transition(Decision::Rejected);
        t.user_email = Some(String::new());

        assert_eq!(compose(&t), Err(ComposeError::MissingRecipient));
    }
}
