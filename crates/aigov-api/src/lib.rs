//! # aigov-api — Axum API Service
//!
//! HTTP surface for the aigov stack: intake record CRUD and export
//! readiness evaluation against the active tier table.
//!
//! ## API Surface
//!
//! | Prefix                          | Module                 | Domain              |
//! |---------------------------------|------------------------|---------------------|
//! | `/v1/records/*`                 | [`routes::records`]    | Intake record CRUD  |
//! | `/v1/records/{id}/readiness`    | [`routes::readiness`]  | Tier evaluation     |
//! | `/v1/readiness`, `/v1/tiers`    | [`routes::readiness`]  | Stateless eval      |
//! | `/health/*`                     | here                   | Probes              |
//!
//! ## Architecture
//!
//! Route handlers hold no business logic: completeness rules and tier
//! composition live in `aigov-core`, and handlers only load state, call
//! the evaluator, and shape responses. All errors map to structured
//! HTTP responses via [`AppError`].

pub mod error;
pub mod payload;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the API router so
/// they stay reachable regardless of API middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::records::router())
        .merge(routes::readiness::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
