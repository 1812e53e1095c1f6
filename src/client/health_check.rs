// src/client/health_check.rs
use super::error::HealthCheckError;
use crate::models::{ProjectCheck, ProjectCheckRequest};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, error, warn};
use url::Url;
use uuid::Uuid;

pub const DEFAULT_HOST: &str = "https://msc-health-check.herokuapp.com";
pub const CONTEXT_PATH: &str = "health-check";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Operations offered by the remote health-check API.
#[async_trait]
pub trait HealthCheckApi: Send + Sync {
    /// Register a project, `POST {host}/health-check`.
    async fn add_service(
        &self,
        request: &ProjectCheckRequest,
    ) -> Result<ProjectCheck, HealthCheckError>;

    /// Record a live signal, `PUT {host}/health-check/{app_name}/{id}`.
    async fn add_live_signal(
        &self,
        id: &str,
        app_name: &str,
    ) -> Result<ProjectCheck, HealthCheckError>;
}

/// Client for the health-check API over a caller-supplied `reqwest::Client`.
///
/// The transport owns the connection pool and the timeout policy; cloning
/// the client shares both.
#[derive(Debug, Clone)]
pub struct HealthCheckClient {
    host: Url,
    http: Client,
}

impl HealthCheckClient {
    pub fn new(http: Client, host: &str) -> Result<Self, HealthCheckError> {
        let url = Url::parse(host).map_err(|source| HealthCheckError::InvalidHost {
            host: host.to_string(),
            source,
        })?;

        if url.cannot_be_a_base() {
            return Err(HealthCheckError::UnsupportedHost(host.to_string()));
        }

        Ok(Self { host: url, http })
    }

    pub fn with_default_host(http: Client) -> Result<Self, HealthCheckError> {
        Self::new(http, DEFAULT_HOST)
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    /// `{host}/health-check/{segments..}`, each segment percent-encoded.
    ///
    /// Segments equal to `.` or `..` are rejected: URL normalization would
    /// collapse them, with or without percent-encoding.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, HealthCheckError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(HealthCheckError::InvalidPathSegment(segment.to_string()));
        }

        let mut url = self.host.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(CONTEXT_PATH).extend(segments);
        }
        Ok(url)
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&ProjectCheckRequest>,
    ) -> Result<ProjectCheck, HealthCheckError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, %method, %url, "Sending health-check request");

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(%request_id, %method, %url, error = %e, "Health-check request failed");
            HealthCheckError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%request_id, %method, %url, %status, "Health-check API rejected request");
            return Err(match status {
                StatusCode::NOT_FOUND => HealthCheckError::NotFound,
                StatusCode::BAD_REQUEST => {
                    // raw bytes, not `text()`, so no charset transcoding happens
                    let body = response.bytes().await.map_err(HealthCheckError::Read)?;
                    HealthCheckError::Validation(String::from_utf8_lossy(&body).into_owned())
                }
                _ => HealthCheckError::Upstream { status },
            });
        }

        let bytes = response.bytes().await.map_err(HealthCheckError::Read)?;
        let project: ProjectCheck = serde_json::from_slice(&bytes)?;

        debug!(
            %request_id,
            id = %project.id,
            app_name = %project.app_name,
            live_signals = project.live_signals.len(),
            "Health-check request succeeded"
        );

        Ok(project)
    }
}

#[async_trait]
impl HealthCheckApi for HealthCheckClient {
    async fn add_service(
        &self,
        request: &ProjectCheckRequest,
    ) -> Result<ProjectCheck, HealthCheckError> {
        let url = self.endpoint(&[])?;
        self.execute(Method::POST, url, Some(request)).await
    }

    async fn add_live_signal(
        &self,
        id: &str,
        app_name: &str,
    ) -> Result<ProjectCheck, HealthCheckError> {
        let url = self.endpoint(&[app_name, id])?;
        self.execute(Method::PUT, url, None).await
    }
}
