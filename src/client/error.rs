// src/client/error.rs
use reqwest::StatusCode;

/// Errors returned by the health-check client operations.
#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    #[error("Invalid health-check host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Health-check host {0:?} cannot carry a path")]
    UnsupportedHost(String),

    #[error("Invalid path segment {0:?}")]
    InvalidPathSegment(String),

    #[error("Failed to execute request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("No project check found")]
    NotFound,

    /// Raw 400 body, e.g. `{"error":"informe nome do app"}`. Invalid UTF-8
    /// sequences are replaced with U+FFFD.
    #[error("{0}")]
    Validation(String),

    #[error("Health-check API returned {status}")]
    Upstream { status: StatusCode },

    #[error("Failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("Failed to decode project check: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HealthCheckError {
    /// HTTP status that produced this error, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HealthCheckError::NotFound => Some(StatusCode::NOT_FOUND),
            HealthCheckError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            HealthCheckError::Upstream { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HealthCheckError::NotFound)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, HealthCheckError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_body_verbatim() {
        let body = r#"{"error":"informe nome do app"}"#;
        let err = HealthCheckError::Validation(body.to_string());

        assert_eq!(err.to_string(), body);
        assert!(err.is_validation());
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(HealthCheckError::NotFound.status(), Some(StatusCode::NOT_FOUND));
        assert!(HealthCheckError::NotFound.is_not_found());

        let upstream = HealthCheckError::Upstream {
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(upstream.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(upstream.to_string(), "Health-check API returned 502 Bad Gateway");

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(HealthCheckError::from(decode).status(), None);
    }
}
