//! Error types for the satchel engine.

use thiserror::Error;

/// Errors that can occur while encoding or decoding calendar data.
///
/// Field-level problems (a malformed date, an unparsable integer) are
/// deliberately not represented here: decoding tolerates them and
/// leaves the affected field at its zero value, so that one bad
/// property in an externally-authored document never hides the rest of
/// the record.
#[derive(Error, Debug)]
pub enum SatchelError {
    #[error("Invalid calendar data: {0}")]
    IcsParse(String),

    #[error("No {0} component found in calendar data")]
    NoMatchingComponent(&'static str),

    #[error("Unrecognized {field} value: '{value}'")]
    UnrecognizedEnumValue { field: &'static str, value: String },
}

/// Result type alias for satchel operations.
pub type SatchelResult<T> = Result<T, SatchelError>;
