pub mod extract;
pub mod health;
pub mod members;
pub mod sessions;

use crate::db::Repository;
use axum::{
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberCreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub message: String,
    pub session_id: i64,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/add_member", post(members::add_member))
        .route("/members", get(members::list_members))
        .route(
            "/members/:id",
            put(members::update_member).delete(members::delete_member),
        )
        .route("/add_session", post(sessions::add_session))
        .route("/session/:session_id", get(sessions::get_session))
        .route(
            "/sessions/:session_id",
            put(sessions::update_session).delete(sessions::delete_session),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
