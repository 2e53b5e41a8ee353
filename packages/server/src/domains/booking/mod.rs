// Booking domain - constrained intent extraction for classroom booking
//
// The backend is instructed (not guaranteed) to answer in one of two JSON
// shapes; the validator treats its output as untrusted input.

pub mod models;
pub mod prompt;
pub mod validator;

pub use models::BookingQuery;
pub use prompt::BOOKING_SYSTEM_INSTRUCTION;
pub use validator::{validate, ParseError};
