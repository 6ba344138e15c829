//! Chat route: keyword-matched replies from the payment assistant.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::routing::post;
use axum::{Json, Router};
use payassist_core::message::{ChatResponse, Message, ResponseStatus, Role};
use payassist_core::responder;
use tracing::{debug, info};
use utoipa::OpenApi;
use validator::Validate;

use crate::error::ServerError;
use crate::schemas::{ChatRequest, ErrorDetail, ErrorResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(chat),
    components(schemas(
        ChatRequest,
        ChatResponse,
        Message,
        Role,
        ResponseStatus,
        ErrorResponse,
        ErrorDetail
    ))
)]
pub struct ChatApi;

/// Register chat routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat", post(chat))
}

/// Answer a chat message (`POST /api/chat`).
///
/// Waits for the configured "thinking" delay, picks a canned reply by
/// keyword category and wraps it in a success envelope. A body sent
/// without `Content-Type` is still parsed as JSON.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Request body could not be read", body = ErrorDetail),
        (status = 413, description = "Request body too large", body = ErrorDetail),
        (status = 422, description = "Invalid request body", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let req = parse_chat_request(&headers, &body?)?;
    req.validate()?;

    debug!(chars = req.messages.chars().count(), "chat request");

    let delay = state.config.think_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let category = responder::classify(&req.messages);
    let content = responder::reply_for(category, &req.messages);
    let resp = payassist_core::assemble(content)?;

    info!(%category, id = resp.message.id(), "chat reply ready");
    Ok(Json(resp))
}

/// Decode the body as JSON unless the caller declared some other media type.
fn parse_chat_request(headers: &HeaderMap, body: &[u8]) -> Result<ChatRequest, ServerError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        if !is_json_content_type(content_type) {
            return Err(ServerError::Validation(
                "Expected request with `Content-Type: application/json`".to_owned(),
            ));
        }
    }
    let Json(req) = Json::<ChatRequest>::from_bytes(body)?;
    Ok(req)
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(raw) = value.to_str() else {
        return false;
    };
    let essence = raw.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod test {
    use super::*;

    fn headers_with(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        headers
    }

    #[test]
    fn json_media_types() {
        assert!(is_json_content_type(&HeaderValue::from_static("application/json")));
        assert!(is_json_content_type(&HeaderValue::from_static(
            "Application/JSON; charset=utf-8"
        )));
        assert!(is_json_content_type(&HeaderValue::from_static("application/problem+json")));
        assert!(!is_json_content_type(&HeaderValue::from_static("text/plain")));
        assert!(!is_json_content_type(&HeaderValue::from_static("application/jsonx")));
    }

    #[test]
    fn body_without_content_type_is_parsed() {
        let req = parse_chat_request(&headers_with(None), r#"{"messages":"余额"}"#.as_bytes()).unwrap();
        assert_eq!(req.messages, "余额");
    }

    #[test]
    fn non_json_content_type_is_refused() {
        let err = parse_chat_request(&headers_with(Some("text/plain")), br#"{"messages":"hi"}"#)
            .unwrap_err();
        assert!(matches!(err, ServerError::Validation(_)));
    }

    #[test]
    fn missing_field_without_content_type_is_refused() {
        let err = parse_chat_request(&headers_with(None), b"{}").unwrap_err();
        assert!(matches!(err, ServerError::Validation(_)));
    }
}
