// Approval domain - event-letter status transitions and the emails they trigger
//
// transition and composer are pure; observer orchestrates them against the
// mailer seam and absorbs every failure.

pub mod composer;
pub mod models;
pub mod observer;
pub mod transition;

pub use composer::{compose, ComposeError};
pub use models::*;
pub use observer::{handle_letter_change, ChangeOutcome};
pub use transition::detect;
