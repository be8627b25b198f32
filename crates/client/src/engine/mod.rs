//! Partition operation execution engine.
//!
//! Everything here is synchronous from the caller's perspective: one
//! remote call at a time, in plan order, with per-step failure
//! reporting. Only a connection failure aborts a sequence.

mod executor;
mod report;
mod runner;
mod safe_delete;

#[cfg(test)]
pub(crate) mod mock;

pub use executor::PartitionExecutor;
pub use report::{RunReport, StepKind, StepOutcome, StepReport};
pub use safe_delete::{DeleteMode, RecreateSpec};
