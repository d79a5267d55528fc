use bunner_csrf_rs::{CsrfOptions, CsrfPolicy, TrustedOrigins, ValidationError};

pub fn build_policy() -> Result<CsrfPolicy, ValidationError> {
    CsrfPolicy::new(CsrfOptions {
        trusted_origins: TrustedOrigins::list(["https://trusted-partner.com"]),
    })
}

pub mod middleware;
