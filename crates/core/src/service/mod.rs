//! Interfaces consumed from the remote execution service.

mod error;
mod traits;

pub use error::{Result, ServiceError};
pub use traits::{Connection, ExecutionService};
