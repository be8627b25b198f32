use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when constructing a time window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("empty window: start {start} is not before end {end}")]
    EmptyWindow { start: NaiveDate, end: NaiveDate },
    #[error("calendar position out of range: year {year}, month {month}")]
    OutOfRange { year: i32, month: u32 },
}
