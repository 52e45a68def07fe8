//! Error types for calendar conversion.

use thiserror::Error;

/// A syntactically well-formed but calendar-invalid date.
///
/// Only the validating conversion entry points report this; the raw JDN
/// arithmetic is total and never fails.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DateError {
    #[error("Invalid Ethiopic date {year}-{month}-{day}")]
    Ethiopic { year: i32, month: i32, day: i32 },

    #[error("Invalid Gregorian date {year}-{month}-{day}")]
    Gregorian { year: i32, month: i32, day: i32 },
}
