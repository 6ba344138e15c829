//! Root status endpoint.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use utoipa::OpenApi;

use crate::schemas::RootStatus;
use crate::state::AppState;

pub const ONLINE_MESSAGE: &str = "Smart Payment Assistant is running!";

#[derive(OpenApi)]
#[openapi(paths(root), components(schemas(RootStatus)))]
pub struct RootApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(root))
}

/// Report that the assistant is online.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Assistant is online", body = RootStatus)
    )
)]
pub async fn root() -> Json<RootStatus> {
    Json(RootStatus {
        status: "online".to_owned(),
        message: ONLINE_MESSAGE.to_owned(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn root_reports_online() {
        let Json(body) = root().await;
        assert_eq!(body.status, "online");
        assert_eq!(body.message, ONLINE_MESSAGE);
    }

    #[tokio::test]
    async fn timestamp_is_iso8601() {
        let Json(body) = root().await;
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}
