// SPDX-License-Identifier: Apache-2.0

//! HTTP error responses.
//!
//! Caller mistakes map to 400, a ping that runs out of time to 408, and
//! execution or storage failures to 500. Internal details are logged and
//! never echoed back, except the captured output of a failed ping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use safeweb_core::SafewebError;
use serde::Serialize;
use tracing::error;

/// Errors returned by route handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required query parameter is absent.
    MissingParameter(&'static str),
    /// The `host` parameter failed hostname validation.
    InvalidHostname,
    /// The `id` parameter is not an integer.
    InvalidId,
    /// The ping command ran out of time.
    PingTimeout,
    /// The ping command exited with a failure status.
    PingFailed {
        /// Captured command output.
        details: String,
    },
    /// Anything else.
    Unexpected,
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error.
    pub error: String,
    /// Extra context, only present for failed pings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidHostname | ApiError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PingTimeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::PingFailed { .. } | ApiError::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            ApiError::MissingParameter(name) => (format!("{name} parameter is required"), None),
            ApiError::InvalidHostname => ("Invalid hostname format".to_string(), None),
            ApiError::InvalidId => ("id must be an integer".to_string(), None),
            ApiError::PingTimeout => ("Ping timeout".to_string(), None),
            ApiError::PingFailed { details } => ("Ping failed".to_string(), Some(details.clone())),
            ApiError::Unexpected => ("Unexpected error".to_string(), None),
        };
        ErrorBody { error, details }
    }
}

impl From<SafewebError> for ApiError {
    fn from(err: SafewebError) -> Self {
        match err {
            SafewebError::InvalidHostname(_) => ApiError::InvalidHostname,
            SafewebError::CommandTimeout { .. } => ApiError::PingTimeout,
            SafewebError::CommandFailed { output, .. } => ApiError::PingFailed { details: output },
            other => {
                error!(error = %other, "request failed");
                ApiError::Unexpected
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safeweb_core::HostnameRejection;

    #[test]
    fn missing_parameter_is_bad_request() {
        let err = ApiError::MissingParameter("host");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().error, "host parameter is required");
        assert!(err.body().details.is_none());
    }

    #[test]
    fn invalid_hostname_maps_to_bad_request() {
        let err = ApiError::from(SafewebError::InvalidHostname(
            HostnameRejection::ShellMetacharacter(';'),
        ));
        assert_eq!(err, ApiError::InvalidHostname);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().error, "Invalid hostname format");
    }

    #[test]
    fn timeout_maps_to_request_timeout() {
        let err = ApiError::from(SafewebError::CommandTimeout { seconds: 5 });
        assert_eq!(err.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(err.body().error, "Ping timeout");
    }

    #[test]
    fn command_failure_keeps_output() {
        let err = ApiError::from(SafewebError::CommandFailed {
            code: Some(1),
            output: "100% packet loss".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body.error, "Ping failed");
        assert_eq!(body.details.as_deref(), Some("100% packet loss"));
    }

    #[test]
    fn other_errors_are_unexpected() {
        let spawn = SafewebError::CommandSpawn(std::io::Error::other("boom"));
        assert_eq!(ApiError::from(spawn), ApiError::Unexpected);

        let config = SafewebError::Config {
            message: "bad".to_string(),
        };
        let err = ApiError::from(config);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, "Unexpected error");
    }

    #[test]
    fn details_are_omitted_from_json_when_absent() {
        let json = serde_json::to_value(ApiError::PingTimeout.body()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Ping timeout" }));
    }
}
