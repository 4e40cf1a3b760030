use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood", post(handlers::select_mood))
        .route("/support", post(handlers::request_support))
        .route("/api/state", get(handlers::get_state))
        .route("/api/history", get(handlers::get_history))
        .route("/api/mood", post(handlers::select_mood_json))
        .route("/api/check-in", post(handlers::check_in))
        .with_state(state)
}
