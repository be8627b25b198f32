//! Time windows, partition identities, and the window resolver.

mod error;
mod resolver;
mod types;

pub use error::WindowError;
pub use resolver::{partition_name, resolve, ResolvedPartition};
pub use types::{NameFormat, PartitionIdentity, TimeWindow};
