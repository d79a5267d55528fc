use bunner_csrf_rs::constants::method;
use bunner_csrf_rs::{CsrfDecision, CsrfOptions, CsrfPolicy, RequestContext, TrustedOrigins};

#[derive(Default)]
pub struct PolicyBuilder {
    trusted_origins: Vec<String>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trusted_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_origins
            .extend(origins.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> CsrfPolicy {
        CsrfPolicy::new(CsrfOptions {
            trusted_origins: TrustedOrigins::list(self.trusted_origins),
        })
        .expect("valid CSRF configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    sec_fetch_site: Option<String>,
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            sec_fetch_site: None,
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn fetch_site(mut self, value: impl Into<String>) -> Self {
        self.sec_fetch_site = Some(value.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, policy: &CsrfPolicy) -> CsrfDecision {
        let RequestBuilder {
            method,
            sec_fetch_site,
            origin,
        } = self;
        let ctx = RequestContext {
            method: &method,
            sec_fetch_site: sec_fetch_site.as_deref(),
            origin: origin.as_deref(),
        };
        policy.check(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
