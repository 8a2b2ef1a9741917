mod cors;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use cors::middleware::{cors_middleware, partner_cors_middleware};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let app_state = cors::build_state()?;

    let partner = Router::new()
        .route("/partner/feed", get(routes::partner_feed))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            partner_cors_middleware,
        ));

    let app = Router::new()
        .route("/greet", get(routes::greet))
        .route("/admin/cors", post(routes::reload_cors))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .merge(partner)
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!(%addr, "axum CORS example listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
