use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use origin_cors::Policy;

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Try calling this endpoint from your frontend to see CORS in action.</p>",
        state.greeting
    ))
}

pub async fn partner_feed() -> impl IntoResponse {
    Html("<p>Partner feed</p>")
}

/// Replaces the global CORS policy with the JSON document in the body.
pub async fn reload_cors(State(state): State<AppState>, body: String) -> impl IntoResponse {
    let policy: Policy = match serde_json::from_str(&body) {
        Ok(policy) => policy,
        Err(err) => return (StatusCode::BAD_REQUEST, format!("invalid policy: {err}")),
    };

    match state.cors.install(&policy) {
        Ok(()) => (StatusCode::OK, "policy installed".to_string()),
        Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    }
}
