//! raads-lambda
//!
//! HTTP surface over the RAADS-R scoring engine. Stateless: every request
//! scores or renders from its own body and nothing is persisted.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router with all routes and layers attached.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/score",
            post(routes::scoring::score_answers),
        )
        .route(
            "/instruments/{id}/assessments",
            post(routes::scoring::submit_assessment),
        )
        .route(
            "/instruments/{id}/structured-input",
            post(routes::scoring::structured_input),
        )
        .route(
            "/interpretation/{total}",
            get(routes::interpretation::get_interpretation),
        )
        .route("/reports", post(routes::reports::create_report))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
