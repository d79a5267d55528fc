use crate::constants::rejection;

/// Outcome of evaluating a request against the admission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfDecision {
    Allow(AllowReason),
    Deny(DenyReason),
}

/// Rule that admitted the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    SafeMethod,
    SameOrigin,
    SameSite,
    TrustedCrossSite,
}

/// Rule that blocked the request. Never disclosed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    MissingFetchSite,
    UserInitiated,
    UnrecognizedFetchSite,
    CrossSiteWithoutOrigin,
    UntrustedCrossSite,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::MissingFetchSite => "missing-fetch-site",
            DenyReason::UserInitiated => "user-initiated",
            DenyReason::UnrecognizedFetchSite => "unrecognized-fetch-site",
            DenyReason::CrossSiteWithoutOrigin => "cross-site-without-origin",
            DenyReason::UntrustedCrossSite => "untrusted-cross-site",
        }
    }
}

/// Response a host must send instead of running the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub body: &'static str,
}

impl Default for Rejection {
    fn default() -> Self {
        Self {
            status: rejection::STATUS,
            body: rejection::BODY,
        }
    }
}

impl CsrfDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CsrfDecision::Allow(_))
    }

    /// The short-circuit response for a denied request, `None` when allowed.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            CsrfDecision::Allow(_) => None,
            CsrfDecision::Deny(_) => Some(Rejection::default()),
        }
    }
}
