//! HTTP route handlers for the password service.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod health;
mod password;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health & Status
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))

        // Password operations
        .nest("/password", password_routes())

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn password_routes() -> Router<AppState> {
    Router::new()
        .route("/encrypt", post(password::encrypt))
        .route("/validate", post(password::validate))
        .route("/generate", post(password::generate))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = get_json(test_router(), "/password").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let (status, _) = get_json(test_router(), "/password/generate").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
