//! Request / response types for the chat, root and health endpoints.

use payassist_core::ResponseStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[schema(example = json!({ "messages": "search for my transaction records" }))]
pub struct ChatRequest {
    /// The user's message, 1 to 1000 characters.
    #[validate(length(
        min = 1,
        max = 1000,
        message = "must be between 1 and 1000 characters"
    ))]
    #[schema(min_length = 1, max_length = 1000)]
    pub messages: String,
}

/// Business-level error envelope, mirroring [`payassist_core::ChatResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Always [`ResponseStatus::Error`].
    pub status: ResponseStatus,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Always `"ok"`.
    pub status: String,
    pub version: String,
    /// Simulated "thinking" time applied to each chat reply.
    pub think_delay_ms: u64,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
}

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootStatus {
    /// Always `"online"`.
    pub status: String,
    pub message: String,
    /// ISO-8601 server time.
    pub timestamp: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn request(len: usize, ch: char) -> ChatRequest {
        ChatRequest {
            messages: std::iter::repeat_n(ch, len).collect(),
        }
    }

    #[test]
    fn error_response_status_is_literal_error() {
        let json = serde_json::to_value(ErrorResponse {
            message: "backend down".into(),
            status: ResponseStatus::Error,
        }).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "backend down");

        let raw = r#"{"message":"x","status":"failed"}"#;
        assert!(serde_json::from_str::<ErrorResponse>(raw).is_err());
    }

    #[test]
    fn empty_message_is_invalid() {
        assert!(request(0, 'a').validate().is_err());
    }

    #[test]
    fn length_bounds() {
        assert!(request(1, 'a').validate().is_ok());
        assert!(request(1000, 'a').validate().is_ok());
        assert!(request(1001, 'a').validate().is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 1000 CJK chars is 3000 bytes of UTF-8.
        assert!(request(1000, '账').validate().is_ok());
        assert!(request(1001, '账').validate().is_err());
    }
}
