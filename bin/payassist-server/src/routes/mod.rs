//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, panic recovery, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI document endpoint (disable with `PAYASSIST_ENABLE_SWAGGER=false`)
//! - Root status and health routes
//! - The chat route

mod chat;
pub mod doc;
mod health;
mod root;

use crate::middleware::{cors, panic, trace};
use crate::state::AppState;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(chat::router());

    let mut app = Router::new().merge(api_router);

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app
        // Outermost layers execute first on the way in.
        .layer(
            ServiceBuilder::new()
                .layer(cors::cors_layer(state.clone()))
                .layer(panic::catch_panic_layer()),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace::trace_middleware,
        ))
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
