use std::sync::Arc;

use bunner_csrf_rs::{CsrfOptions, CsrfPolicy, TrustedOrigins, ValidationError};

pub type SharedPolicy = Arc<CsrfPolicy>;

pub fn build_policy() -> Result<SharedPolicy, ValidationError> {
    let options = CsrfOptions {
        trusted_origins: TrustedOrigins::list([
            "https://trusted-partner.com",
            "http://localhost:3000",
        ]),
    };

    Ok(Arc::new(CsrfPolicy::new(options)?))
}

pub mod middleware;
