use crate::constants::method;
use crate::context::RequestContext;
use crate::fetch_site::FetchSite;
use crate::options::{CsrfOptions, ValidationError};
use crate::result::{AllowReason, CsrfDecision, DenyReason};
use crate::trusted_origins::TrustedOrigins;
use crate::vary::annotate_vary;
use std::borrow::Cow;

/// Decide whether a request may reach state-changing application logic.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `GET`, `HEAD` and `OPTIONS` are always allowed.
/// 2. `same-origin` and `same-site` requests are allowed.
/// 3. `cross-site` requests are allowed only when `origin` is in `trusted_origins`.
/// 4. Everything else is denied.
///
/// `method` is compared case-sensitively, exactly as transmitted.
pub fn evaluate(
    method: &str,
    fetch_site: FetchSite,
    origin: Option<&str>,
    trusted_origins: &TrustedOrigins,
) -> CsrfDecision {
    if method::SAFE.contains(&method) {
        return CsrfDecision::Allow(AllowReason::SafeMethod);
    }

    match fetch_site {
        FetchSite::SameOrigin => CsrfDecision::Allow(AllowReason::SameOrigin),
        FetchSite::SameSite => CsrfDecision::Allow(AllowReason::SameSite),
        FetchSite::CrossSite => match origin {
            Some(origin) if trusted_origins.contains(origin) => {
                CsrfDecision::Allow(AllowReason::TrustedCrossSite)
            }
            Some(_) => CsrfDecision::Deny(DenyReason::UntrustedCrossSite),
            None => CsrfDecision::Deny(DenyReason::CrossSiteWithoutOrigin),
        },
        FetchSite::UserInitiated => CsrfDecision::Deny(DenyReason::UserInitiated),
        FetchSite::Missing => CsrfDecision::Deny(DenyReason::MissingFetchSite),
        FetchSite::Unrecognized => CsrfDecision::Deny(DenyReason::UnrecognizedFetchSite),
    }
}

/// Admission policy with a frozen trusted-origin set.
///
/// Build once at startup and share it (e.g. behind an `Arc`) across requests.
/// Hosts call [`check`](Self::check) before the handler runs and
/// [`annotate`](Self::annotate) on every response, allowed or not.
#[derive(Debug, Clone)]
pub struct CsrfPolicy {
    trusted_origins: TrustedOrigins,
}

impl CsrfPolicy {
    pub fn new(options: CsrfOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self {
            trusted_origins: options.trusted_origins,
        })
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CsrfDecision {
        let fetch_site = FetchSite::from_header(request.sec_fetch_site);
        let decision = evaluate(
            request.method,
            fetch_site,
            request.origin,
            &self.trusted_origins,
        );

        match decision {
            CsrfDecision::Deny(reason) => tracing::debug!(
                method = request.method,
                fetch_site = ?fetch_site,
                reason = reason.as_str(),
                "cross-site request denied"
            ),
            CsrfDecision::Allow(reason) => tracing::trace!(
                method = request.method,
                fetch_site = ?fetch_site,
                reason = ?reason,
                "request admitted"
            ),
        }

        decision
    }

    pub fn annotate<'a>(&self, existing_vary: Option<&'a str>) -> Cow<'a, str> {
        annotate_vary(existing_vary)
    }

    pub fn trusted_origins(&self) -> &TrustedOrigins {
        &self.trusted_origins
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
