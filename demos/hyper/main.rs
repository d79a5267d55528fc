mod csrf;
mod routes;

use std::error::Error;
use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,bunner_csrf_rs=debug".into()),
        )
        .init();

    let policy = csrf::build_policy()?;

    let addr: SocketAddr = "127.0.0.1:5003".parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "hyper example running");

    loop {
        let (stream, _) = listener.accept().await?;
        let policy = policy.clone();
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            let service = csrf::middleware::BunnerCsrf::new(policy, routes::router());

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(error = %err, "connection error");
            }
        });
    }
}
