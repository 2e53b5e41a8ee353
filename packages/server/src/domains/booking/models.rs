use serde::{Deserialize, Serialize};

/// A validated booking-assistant reply.
///
/// Untagged on the wire: classification is by field shape, tried in
/// declaration order. A payload carrying both shapes classifies as an
/// availability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingQuery {
    /// A parsed room-availability intent. All four fields are required
    /// strings; their formats are whatever the instruction asked for and
    /// are not checked here.
    #[serde(rename_all = "camelCase")]
    Availability {
        room_id: String,
        date: String,
        start: String,
        end: String,
    },
    /// The assistant could not extract a structured intent.
    Fallback { content: String },
}
