use crate::state::AppState;
use axum::http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy: every method and header, credentials allowed.
///
/// The `*` wildcard is not valid together with credentials, so origin,
/// methods and headers are mirrored back from the preflight instead.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    let origin = match &state.config.cors_allowed_origins {
        Some(origins_str) => {
            let origins: Vec<HeaderValue> = origins_str
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                AllowOrigin::mirror_request()
            } else {
                AllowOrigin::list(origins)
            }
        }
        None => AllowOrigin::mirror_request(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
