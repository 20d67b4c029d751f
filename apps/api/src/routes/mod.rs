pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard;
use crate::feed;
use crate::prediction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prediction API
        .route(
            "/api/v1/profiles/:user_id",
            get(prediction::handlers::handle_get_profile),
        )
        .route(
            "/api/v1/predictions",
            post(prediction::handlers::handle_assess),
        )
        .route(
            "/api/v1/predictions/:user_id",
            get(prediction::handlers::handle_get_prediction),
        )
        .route(
            "/api/v1/predictions/:user_id/export",
            get(prediction::handlers::handle_export_prediction),
        )
        // Community feed API
        .route(
            "/api/v1/contributions",
            post(feed::handlers::handle_create_contribution)
                .get(feed::handlers::handle_list_contributions),
        )
        .route(
            "/api/v1/contributions/:id/vote",
            post(feed::handlers::handle_vote),
        )
        .route(
            "/api/v1/contributions/:id/comments",
            post(feed::handlers::handle_create_comment)
                .get(feed::handlers::handle_list_comments),
        )
        // Dashboard API
        .route(
            "/api/v1/dashboard/metrics",
            get(dashboard::handlers::handle_metrics),
        )
        .with_state(state)
}
