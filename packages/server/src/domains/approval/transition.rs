//! Transition detection - the single place that decides what counts as a
//! status change worth notifying.

use super::models::{
    ApprovalRecord, ApprovalStatus, Decision, NotifiableTransition, TransitionOutcome,
};

/// Compare a before/after snapshot pair.
///
/// Returns `NoTransition` when either snapshot is absent, when the status
/// did not change, or when the new status is not a terminal decision.
/// Re-delivery of an unchanged pair therefore never notifies twice.
pub fn detect(
    previous: Option<&ApprovalRecord>,
    current: Option<&ApprovalRecord>,
) -> TransitionOutcome {
    let (previous, current) = match (previous, current) {
        (Some(previous), Some(current)) => (previous, current),
        _ => return TransitionOutcome::NoTransition,
    };

    if previous.approval_status == current.approval_status {
        return TransitionOutcome::NoTransition;
    }

    let decision = match current.approval_status {
        ApprovalStatus::Approved => Decision::Approved,
        ApprovalStatus::Rejected => Decision::Rejected,
        ApprovalStatus::Pending => return TransitionOutcome::NoTransition,
    };

    TransitionOutcome::Notifiable(NotifiableTransition {
        decision,
        user_email: current.user_email.clone(),
        event_name: current.event_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: ApprovalStatus) -> ApprovalRecord {
        ApprovalRecord {
            approval_status: status,
            user_email: Some("a@b.com".to_string()),
            event_name: Some("Hack Night".to_string()),
        }
    }

    #[test]
    fn test_missing_snapshots_are_ignored() {
        let current = record(ApprovalStatus::Approved);

        assert_eq!(detect(None, Some(&current)), TransitionOutcome::NoTransition);
        assert_eq!(
            detect(Some(&current), None),
            TransitionOutcome::NoTransition
        );
        assert_eq!(detect(None, None), TransitionOutcome::NoTransition);
    }

    #[test]
    fn test_unchanged_status_is_ignored() {
        // Re-delivery of the same state must never notify again
        for status in [
            ApprovalStatus::Pending,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
        ] {
            let previous = record(status);
            let current = record(status);
            assert_eq!(
                detect(Some(&previous), Some(&current)),
                TransitionOutcome::NoTransition
            );
        }
    }

    #[test]
    fn test_change_back_to_pending_is_ignored() {
        let previous = record(ApprovalStatus::Approved);
        let current = record(ApprovalStatus::Pending);

        assert_eq!(
            detect(Some(&previous), Some(&current)),
            TransitionOutcome::NoTransition
        );
    }

    #[test]
    fn test_pending_to_approved_is_notifiable() {
        let previous = record(ApprovalStatus::Pending);
        let current = record(ApprovalStatus::Approved);

        let outcome = detect(Some(&previous), Some(&current));

        assert_eq!(
            outcome,
            TransitionOutcome::Notifiable(NotifiableTransition {
                decision: Decision::Approved,
                user_email: Some("a@b.com".to_string()),
                event_name: Some("Hack Night".to_string()),
            })
        );
    }

    #[test]
    fn test_pending_to_rejected_is_notifiable() {
        let previous = record(ApprovalStatus::Pending);
        let current = record(ApprovalStatus::Rejected);

        match detect(Some(&previous), Some(&current)) {
            TransitionOutcome::Notifiable(transition) => {
                assert_eq!(transition.decision, Decision::Rejected);
            }
            other => panic!("expected notifiable transition, got {:?}", other),
        }
    }

    #[test]
    fn test_approved_to_rejected_is_notifiable() {
        // A reversed decision is still a decision
        let previous = record(ApprovalStatus::Approved);
        let current = record(ApprovalStatus::Rejected);

        assert!(matches!(
            detect(Some(&previous), Some(&current)),
            TransitionOutcome::Notifiable(_)
        ));
    }
}
