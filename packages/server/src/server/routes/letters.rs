//! Change trigger adapter for `event_letters/{docId}` documents.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::approval::{handle_letter_change, ApprovalRecord};
use crate::server::app::AppState;

/// One delivered mutation: the document's snapshots before and after.
/// Either side may be absent (create or delete).
#[derive(Debug, Deserialize)]
pub struct LetterChangeEvent {
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub before: Option<ApprovalRecord>,
    #[serde(default)]
    pub after: Option<ApprovalRecord>,
}

/// `POST /hooks/event-letters` - the shim between the trigger transport
/// and the observer.
///
/// Always answers 200, malformed payloads included: the trigger's only
/// recovery is redelivery, which is not safe once an email may already
/// have left.
pub async fn letter_change_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> StatusCode {
    let event: LetterChangeEvent = match serde_json::from_value(payload) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Unreadable letter change event");
            return StatusCode::OK;
        }
    };

    let doc_id = event.doc_id.as_deref().unwrap_or("unknown");
    let outcome = handle_letter_change(
        doc_id,
        event.before.as_ref(),
        event.after.as_ref(),
        state.deps.mailer.as_ref(),
    )
    .await;

    info!(doc_id = %doc_id, outcome = ?outcome, "Letter change handled");
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::kernel::test_dependencies::{MockChatModel, MockMailer};
    use crate::kernel::ServerDeps;
    use crate::server::build_app;

    fn app_with_mailer(mailer: Arc<MockMailer>) -> axum::Router {
        let deps = Arc::new(ServerDeps::new(
            mailer,
            Arc::new(MockChatModel::with_response("{}")),
        ));
        build_app(deps)
    }

    fn hook_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/hooks/event-letters")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_approval_change_sends_email() {
        let mailer = Arc::new(MockMailer::new());
        let app = app_with_mailer(mailer.clone());

        let response = app
            .oneshot(hook_request(serde_json::json!({
                "doc_id": "letter-7",
                "before": {"approvalStatus": "pending", "userEmail": "a@b.com", "eventName": "Hack Night"},
                "after": {"approvalStatus": "approved", "userEmail": "a@b.com", "eventName": "Hack Night"},
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Your Event Letter Has Been Approved");
    }

    #[tokio::test]
    async fn test_redelivered_unchanged_event_sends_nothing() {
        let mailer = Arc::new(MockMailer::new());
        let app = app_with_mailer(mailer.clone());

        let response = app
            .oneshot(hook_request(serde_json::json!({
                "before": {"approvalStatus": "approved", "userEmail": "a@b.com"},
                "after": {"approvalStatus": "approved", "userEmail": "a@b.com"},
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_event_still_answers_ok() {
        let mailer = Arc::new(MockMailer::new());
        let app = app_with_mailer(mailer.clone());

        let response = app
            .oneshot(hook_request(serde_json::json!({
                "before": {"approvalStatus": "not-a-status"},
                "after": 12,
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_still_answers_ok() {
        let mailer = Arc::new(MockMailer::failing());
        let app = app_with_mailer(mailer);

        let response = app
            .oneshot(hook_request(serde_json::json!({
                "before": {"approvalStatus": "pending", "userEmail": "a@b.com"},
                "after": {"approvalStatus": "rejected", "userEmail": "a@b.com"},
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
