//! Schema validation of raw backend output.
//!
//! The model is instructed to emit one of two JSON shapes, but instruction
//! is not a protocol guarantee, so everything it returns is treated as
//! untrusted input and must match a declared variant exactly.

use thiserror::Error;

use super::models::BookingQuery;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The output was not valid JSON at all.
    #[error("backend output is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    /// Valid JSON, but neither an availability query nor a fallback
    /// message.
    #[error("backend output matches no permitted shape")]
    UnknownShape,
}

/// Parse raw backend text into a [`BookingQuery`].
///
/// Two steps: JSON parse, then shape classification. All four of
/// `roomId`/`date`/`start`/`end` present as strings makes an availability
/// query; otherwise a string `content` field makes a fallback message;
/// anything else is rejected. Date and time strings are not validated
/// beyond being present - a known gap carried over from the instruction
/// contract, not tightened here.
pub fn validate(raw: &str) -> Result<BookingQuery, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(ParseError::NotJson)?;
    serde_json::from_value(value).map_err(|_| ParseError::UnknownShape)
}
