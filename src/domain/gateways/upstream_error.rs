//! Error taxonomy for upstream calls.

use thiserror::Error;

/// A failed upstream call.
///
/// Every variant carries the `resource` that was requested (for example
/// `app details 440`) so that log lines can be traced back to an id.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success HTTP status.
    #[error("{resource}: upstream returned HTTP {status}")]
    Http { resource: String, status: u16 },

    /// The body was not valid JSON or did not match the expected shape.
    #[error("{resource}: failed to decode upstream payload: {reason}")]
    Decode { resource: String, reason: String },

    /// A nested key the projection depends on is absent.
    #[error("{resource}: upstream payload is missing key '{missing_key}'")]
    Shape {
        resource: String,
        missing_key: String,
    },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("{resource}: network error: {cause}")]
    Network { resource: String, cause: String },
}

impl UpstreamError {
    /// Returns the upstream HTTP status for [`UpstreamError::Http`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the resource the failed call was made for.
    pub fn resource(&self) -> &str {
        match self {
            Self::Http { resource, .. }
            | Self::Decode { resource, .. }
            | Self::Shape { resource, .. }
            | Self::Network { resource, .. } => resource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_resource_and_reason() {
        let err = UpstreamError::Shape {
            resource: "app details 440".to_string(),
            missing_key: "data".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "app details 440: upstream payload is missing key 'data'"
        );
        assert_eq!(err.resource(), "app details 440");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_only_for_http_variant() {
        let err = UpstreamError::Http {
            resource: "app list".to_string(),
            status: 503,
        };
        assert_eq!(err.status(), Some(503));

        let err = UpstreamError::Network {
            resource: "app list".to_string(),
            cause: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
