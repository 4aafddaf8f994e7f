use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Policy error: {0}")]
    Policy(#[from] policy::PolicyError),

    #[error("Match error: {0}")]
    Match(#[from] matcher::MatchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("metrics recorder is not installed")]
    MetricsDisabled,

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MetricsDisabled => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Match(err) if err.is_invalid_input() => StatusCode::BAD_REQUEST,
            ServerError::Policy(err) => StatusCode::from_u16(err.http_status_code())
                .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
            ServerError::Match(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Match(err) if err.is_invalid_input() => "BAD_REQUEST",
            ServerError::Policy(_) => "POLICY_ERROR",
            ServerError::Match(_) => "MATCH_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::MetricsDisabled => "METRICS_DISABLED",
            ServerError::NotFound => "NOT_FOUND",
        }
    }

    /// The JSON body sent to clients.
    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::MatchError;

    #[test]
    fn empty_query_maps_to_bad_request() {
        let err = ServerError::from(MatchError::EmptyQuery);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "BAD_REQUEST");
    }

    #[test]
    fn invalid_config_maps_to_internal_error() {
        let err = ServerError::from(MatchError::InvalidConfig("bad threshold".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "MATCH_ERROR");
    }

    #[test]
    fn policy_parse_error_is_unprocessable() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ServerError::from(policy::PolicyError::Parse(parse));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), "POLICY_ERROR");
    }

    #[test]
    fn not_found_has_stable_code() {
        assert_eq!(ServerError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServerError::NotFound.error_code(), "NOT_FOUND");
    }

    #[test]
    fn response_body_carries_code_and_message() {
        let body = serde_json::to_value(ServerError::MetricsDisabled.to_response_body())
            .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "error": {
                    "code": "METRICS_DISABLED",
                    "message": "metrics recorder is not installed",
                }
            })
        );
    }
}
