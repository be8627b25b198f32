use async_trait::async_trait;

use crate::tmsl::{ProcessingRequest, TmslScript};

use super::Result;

/// Remote execution service accepting declarative documents and
/// processing commands. Both are black-box RPCs: callers see success or
/// failure and never inspect response bodies.
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Runs a declarative operation document.
    async fn execute(&self, document: &TmslScript) -> Result<()>;

    /// Runs a processing command.
    async fn process(&self, request: &ProcessingRequest) -> Result<()>;
}

/// Authenticated session with the execution service.
///
/// Tenant, credential reference, and location travel in the
/// implementation's configuration rather than per call, so connecting is
/// a plain precondition checked once per public operation.
#[async_trait]
pub trait Connection: Send + Sync {
    fn is_connected(&self) -> bool;

    /// Establishes the session. Failure is fatal to the invocation.
    async fn connect(&self) -> Result<()>;
}
