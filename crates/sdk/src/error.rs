//! Error types for the Dokploy SDK.

/// Result type for SDK operations.
pub type DokployResult<T> = Result<T, DokployError>;

/// Error types that can occur when talking to a Dokploy instance.
#[derive(Debug, thiserror::Error)]
pub enum DokployError {
    /// The request never reached the remote host or never came back
    /// (DNS, connection refused, timeout, truncated body).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// A client-side lookup could not locate a parent or its default child.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl DokployError {
    /// Create an upstream error from a status code and the raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Upstream {
            status,
            message: body.to_string(),
        }
    }

    /// Short machine-readable label for the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Upstream { .. } => "upstream",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Json(_) => "json",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }

    /// Status code reported by the remote API, if this is an upstream error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the remote API reported the resource as missing.
    pub fn is_upstream_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_keeps_body_verbatim() {
        let err = DokployError::from_response(401, "{\"message\":\"Unauthorized\"}");
        match err {
            DokployError::Upstream { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "{\"message\":\"Unauthorized\"}");
            }
            other => panic!("Expected Upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(DokployError::NotFound("x".into()).kind(), "not_found");
        assert_eq!(DokployError::from_response(500, "boom").kind(), "upstream");
        assert_eq!(DokployError::Config("x".into()).kind(), "config");
    }

    #[test]
    fn test_status_only_for_upstream() {
        assert_eq!(DokployError::from_response(404, "").status(), Some(404));
        assert!(DokployError::from_response(404, "").is_upstream_not_found());
        assert_eq!(DokployError::NotFound("p".into()).status(), None);
    }
}
