mod csrf;
mod routes;

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use csrf::middleware::csrf_middleware;
use tracing_subscriber::{EnvFilter, fmt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,bunner_csrf_rs=debug".into()),
        )
        .init();

    let policy = web::Data::new(csrf::build_policy().expect("valid CSRF configuration"));
    tracing::info!("actix example running on http://127.0.0.1:5002");

    HttpServer::new(move || {
        App::new()
            .app_data(policy.clone())
            .wrap(from_fn(csrf_middleware))
            .route("/", web::get().to(routes::greet))
            .route("/", web::post().to(routes::submit))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}
