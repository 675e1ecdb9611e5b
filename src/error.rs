use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::gateways::UpstreamError;

/// Error returned by HTTP handlers.
///
/// Responses carry no body: upstream details are logged, never sent to the
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    /// Upstream answered with this 4xx or 5xx status; relayed unchanged.
    Upstream(StatusCode),
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream(status) => *status,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        match e.status().map(StatusCode::from_u16) {
            Some(Ok(status)) if status.is_client_error() || status.is_server_error() => {
                AppError::Upstream(status)
            }
            // 1xx and 3xx are never relayed.
            Some(_) => AppError::Upstream(StatusCode::BAD_GATEWAY),
            None => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

/// Logs an upstream failure with its context and converts it for the client.
pub fn map_upstream_error(operation: &'static str, e: UpstreamError) -> AppError {
    error!(
        operation,
        resource = e.resource(),
        status = ?e.status(),
        error = %e,
        "Upstream call failed"
    );
    AppError::from(e)
}
