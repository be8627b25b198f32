//! TMSL document rendering and processing requests.

mod document;
mod process;

pub use document::{contains_raw_quotes, PartitionOperation, TmslScript};
pub use process::{refresh_script, ProcessTarget, ProcessingRequest, RefreshMode};
