//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a `{"detail": "..."}` JSON body with an appropriate status code.
//!
//! Internal errors include their cause in the response body. Redact it
//! before exposing this server outside a demo setting.

use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use payassist_core::AssembleError;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::schemas::ErrorDetail;

/// All errors that can occur in the payassist-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body failed schema validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request body could not be read.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the configured size limit.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Building the reply envelope failed.
    #[error("{0}")]
    Assemble(#[from] AssembleError),

    /// An unclassified internal server error.
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Assemble(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ServerError::Validation(m)
            | ServerError::BadRequest(m)
            | ServerError::PayloadTooLarge(m) => {
                warn!(detail = %m, "request rejected");
                m.clone()
            }
            ServerError::Assemble(_) | ServerError::Internal(_) => {
                error!(error = %self, "internal server error");
                format!("Internal server error: {self}")
            }
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(inner) => ServerError::from(inner),
            other => ServerError::Validation(other.body_text()),
        }
    }
}

impl From<BytesRejection> for ServerError {
    fn from(rejection: BytesRejection) -> Self {
        let detail = rejection.body_text();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(detail)
        } else {
            ServerError::BadRequest(detail)
        }
    }
}

impl From<ValidationErrors> for ServerError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let reason = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{field}: {reason}")
                })
            })
            .collect();
        fields.sort();
        ServerError::Validation(fields.join("; "))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_422() {
        let resp = ServerError::Validation("messages: too long".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["detail"], "messages: too long");
    }

    #[tokio::test]
    async fn body_errors_keep_their_status() {
        let resp = ServerError::BadRequest("connection reset".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["detail"], "connection reset");

        let resp = ServerError::PayloadTooLarge("body over 65536 bytes".into()).into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn json_syntax_errors_stay_validation() {
        let rejection = axum::Json::<serde_json::Value>::from_bytes(b"{oops").unwrap_err();
        let err = ServerError::from(rejection);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn internal_maps_to_500_with_cause() {
        let resp = ServerError::Internal("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["detail"], "Internal server error: boom");
    }

    #[tokio::test]
    async fn assemble_error_maps_to_500() {
        let at = Utc.timestamp_millis_opt(-1).unwrap();
        let resp = ServerError::from(AssembleError::ClockBeforeEpoch(at)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body_json(resp).await["detail"].as_str().unwrap().to_owned();
        assert!(detail.starts_with("Internal server error: system clock"));
    }
}
