//! HTTP client for the remote execution service.

use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tabroll_core::service::{Connection, ExecutionService, Result, ServiceError};
use tabroll_core::tmsl::{refresh_script, ProcessingRequest, TmslScript};

/// Explicit session configuration threaded through every call.
///
/// Replaces process-wide mutable defaults: one initialization point, no
/// hidden mutation afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the execution endpoint.
    pub endpoint: String,
    pub tenant: String,
    /// Opaque reference to the credential; resolution happens elsewhere.
    pub credential_ref: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
struct ConnectRequest<'a> {
    tenant: &'a str,
    credential: &'a str,
    location: &'a str,
}

#[derive(Debug, Deserialize)]
struct ConnectResponse {
    token: String,
}

/// HTTP implementation of the execution service interface.
#[derive(Debug)]
pub struct TabularClient {
    http: reqwest::Client,
    config: ServiceConfig,
    session: RwLock<Option<String>>,
}

impl TabularClient {
    /// Creates a disconnected client over the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint, path)
    }

    fn token(&self) -> Option<String> {
        self.session.read().ok().and_then(|session| session.clone())
    }

    async fn post_script(
        &self,
        path: &str,
        script: &TmslScript,
        on_failure: fn(String) -> ServiceError,
    ) -> Result<()> {
        let mut request = self
            .http
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(script.as_str().to_owned());
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(|e| on_failure(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(on_failure(format!("{}: {}", status.as_u16(), detail)))
        }
    }
}

#[async_trait]
impl Connection for TabularClient {
    fn is_connected(&self) -> bool {
        self.session
            .read()
            .map(|session| session.is_some())
            .unwrap_or(false)
    }

    async fn connect(&self) -> Result<()> {
        let body = ConnectRequest {
            tenant: &self.config.tenant,
            credential: &self.config.credential_ref,
            location: &self.config.location,
        };
        let response = self
            .http
            .post(self.url("/api/connect"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Connection(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ServiceError::Connection(format!(
                "{}: {}",
                status.as_u16(),
                detail
            )));
        }
        let connected: ConnectResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Connection(e.to_string()))?;
        if let Ok(mut session) = self.session.write() {
            *session = Some(connected.token);
        }
        tracing::info!(endpoint = %self.config.endpoint, "session established");
        Ok(())
    }
}

#[async_trait]
impl ExecutionService for TabularClient {
    async fn execute(&self, document: &TmslScript) -> Result<()> {
        self.post_script("/api/execute", document, ServiceError::Execution)
            .await
    }

    async fn process(&self, request: &ProcessingRequest) -> Result<()> {
        let script = refresh_script(request);
        tracing::debug!(target = %request.target.describe(), mode = %request.refresh_mode, "processing");
        self.post_script("/api/refresh", &script, ServiceError::Processing)
            .await
    }
}
