//! Route definitions for the Exercise Tracker API
//!
//! This module organizes all API routes and applies middleware.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    error_handling::HandleErrorLayer,
    http::{header, Method},
    routing::get,
    BoxError, Router,
};
use std::path::Path;
use std::time::Duration;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

mod exercise;
mod extract;
mod health;
mod users;


pub use exercise::exercise_routes;
pub use extract::FormOrJson;
pub use users::user_routes;

/// Upper bound on the time a single request may take
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let server = &state.config().server;
    let landing_page = ServeFile::new(Path::new(&server.views_dir).join("index.html"));
    let public_files = ServeDir::new(&server.public_dir);

    let router = Router::new()
        .route_service("/", landing_page)
        .nest_service("/public", public_files)
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes());

    // Apply middleware layers
    with_timeout(router, REQUEST_TIMEOUT)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Abort requests that outlive `timeout`.
///
/// A timed-out request is answered like any other API failure, with
/// `{ "error": ... }` and HTTP 200.
fn with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(timeout),
    )
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Internal(anyhow::anyhow!("Request timed out"))
    } else {
        ApiError::Internal(anyhow::anyhow!("Unhandled middleware error: {}", err))
    }
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::user_routes())
        .merge(exercise::exercise_routes())
}
