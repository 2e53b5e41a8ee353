// Event Letters - API Core
//
// Backend for the event-letter approval flow and the classroom booking
// assistant. Two independent pipelines:
//
// - approval: reacts to event-letter status changes and emails the
//   requesting user via SendGrid
// - booking: turns free-text booking requests into a constrained
//   structured query via Gemini
//
// Business logic lives in domains/, infrastructure seams in kernel/,
// HTTP plumbing in server/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
