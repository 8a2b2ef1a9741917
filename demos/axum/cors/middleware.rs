use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use origin_cors::{CorsOutcome, OwnedRequestContext};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let outcome = state.cors.evaluate(&owned_ctx.as_context());
    respond(outcome, request, next).await
}

pub async fn partner_cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let outcome = state
        .cors
        .evaluate_scoped(Some(&state.partner_cors), &owned_ctx.as_context());
    respond(outcome, request, next).await
}

async fn respond(outcome: CorsOutcome, request: Request, next: Next) -> Response {
    if let Some(response) = outcome.terminal_response::<Body>() {
        return response;
    }

    let mut response = next.run(request).await;
    outcome.apply_to(response.headers_mut());
    response
}
