//! Per-request tracing.
//!
//! Opens an `http_request` span keyed by a trace id, buffers the request
//! body up to `Config::max_body_bytes` so small JSON payloads can be
//! logged, and stamps the trace id on the response.

use crate::error::ServerError;
use crate::state::AppState;
use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

/// JSON bodies shorter than this are written to the log.
const MAX_LOGGED_BODY: usize = 1024;

pub async fn trace_middleware(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // Reuse the caller's trace id when it is a valid UUID.
    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let limit = state.config.max_body_bytes;

    async move {
        let started = Instant::now();
        let trace_header = HeaderValue::from_str(&trace_id.to_string()).ok();

        let response = match buffer_request(req, limit).await {
            Ok(mut req) => {
                if let Some(value) = &trace_header {
                    req.headers_mut().insert(X_TRACE_ID, value.clone());
                }
                next.run(req).await
            }
            Err(e) => e.into_response(),
        };

        let mut response = log_response(response).await;
        if let Some(value) = trace_header {
            response.headers_mut().insert(X_TRACE_ID, value);
        }

        info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis(),
            "request finished"
        );
        response
    }
    .instrument(span)
    .await
}

/// Read the whole request body, refusing anything over `limit` bytes.
async fn buffer_request(req: Request<Body>, limit: usize) -> Result<Request<Body>, ServerError> {
    let (parts, body) = req.into_parts();
    let bytes = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => {
            warn!(limit, "request body over limit");
            return Err(ServerError::PayloadTooLarge(format!(
                "request body exceeds {limit} bytes"
            )));
        }
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            return Err(ServerError::BadRequest(format!(
                "failed to read request body: {e}"
            )));
        }
    };
    log_body("request", &parts.headers, &bytes);
    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Log JSON response bodies. Other responses pass through unbuffered.
async fn log_response(response: Response) -> Response {
    if !is_json(response.headers()) {
        return response;
    }
    let (parts, body) = response.into_parts();
    match body.collect().await {
        Ok(collected) => {
            let bytes = collected.to_bytes();
            log_body("response", &parts.headers, &bytes);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => ServerError::Internal(format!("failed to buffer response body: {e}"))
            .into_response(),
    }
}

fn log_body(direction: &str, headers: &HeaderMap, bytes: &Bytes) {
    if bytes.is_empty() {
        return;
    }
    match std::str::from_utf8(bytes) {
        Ok(text) if is_json(headers) && bytes.len() < MAX_LOGGED_BODY => {
            debug!(body = text, "{direction} body");
        }
        _ => debug!(size = bytes.len(), "{direction} body not logged"),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("json"))
}
