mod csrf;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use csrf::middleware::csrf_middleware;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,bunner_csrf_rs=debug".into()),
        )
        .init();

    let app_state = csrf::build_state().expect("valid CSRF configuration");

    let app = Router::new()
        .route("/", get(routes::greet).post(routes::submit))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            csrf_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!(%addr, "axum example running");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
