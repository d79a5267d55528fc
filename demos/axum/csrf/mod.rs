use std::sync::Arc;

use bunner_csrf_rs::{CsrfOptions, CsrfPolicy, TrustedOrigins, ValidationError};

pub type SharedPolicy = Arc<CsrfPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub policy: SharedPolicy,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CsrfOptions {
        trusted_origins: TrustedOrigins::list(["https://trusted-partner.com"]),
    };

    Ok(AppState {
        policy: Arc::new(CsrfPolicy::new(options)?),
        greeting: "Welcome to the Axum CSRF example!",
    })
}

pub mod middleware;
