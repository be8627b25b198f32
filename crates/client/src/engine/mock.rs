//! Recording execution service for engine tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use tabroll_core::service::{Connection, ExecutionService, Result, ServiceError};
use tabroll_core::tmsl::{ProcessingRequest, TmslScript};

/// In-memory service that records every call and can be told to fail
/// specific ones.
#[derive(Debug, Default)]
pub(crate) struct RecordingService {
    scripts: Mutex<Vec<String>>,
    requests: Mutex<Vec<ProcessingRequest>>,
    connected: AtomicBool,
    connect_calls: AtomicUsize,
    fail_connect: bool,
    fail_process: bool,
    fail_execute_containing: Option<String>,
}

impl RecordingService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A service that already holds a session.
    pub(crate) fn connected() -> Self {
        let service = Self::default();
        service.connected.store(true, Ordering::SeqCst);
        service
    }

    pub(crate) fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    pub(crate) fn failing_process(mut self) -> Self {
        self.fail_process = true;
        self
    }

    /// Fails every `execute` whose document contains the pattern.
    pub(crate) fn failing_execute_containing(mut self, pattern: &str) -> Self {
        self.fail_execute_containing = Some(pattern.to_string());
        self
    }

    pub(crate) fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }

    pub(crate) fn requests(&self) -> Vec<ProcessingRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connection for RecordingService {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn connect(&self) -> Result<()> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_connect {
            return Err(ServiceError::Connection("refused".to_string()));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl ExecutionService for RecordingService {
    async fn execute(&self, document: &TmslScript) -> Result<()> {
        let body = document.as_str().to_string();
        let failing = self
            .fail_execute_containing
            .as_deref()
            .is_some_and(|pattern| body.contains(pattern));
        self.scripts.lock().unwrap().push(body);
        if failing {
            return Err(ServiceError::Execution("rejected".to_string()));
        }
        Ok(())
    }

    async fn process(&self, request: &ProcessingRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail_process {
            return Err(ServiceError::Processing("refresh failed".to_string()));
        }
        Ok(())
    }
}
