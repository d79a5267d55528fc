use std::future::Future;
use std::pin::Pin;

use bunner_csrf_rs::constants::header;
use bunner_csrf_rs::{CsrfPolicy, Rejection, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderValue, VARY};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedPolicy;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CsrfBody = Full<Bytes>;

/// Hyper middleware following https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct BunnerCsrf<S> {
    inner: S,
    policy: SharedPolicy,
}

impl<S> BunnerCsrf<S> {
    pub fn new(policy: SharedPolicy, inner: S) -> Self {
        Self { inner, policy }
    }
}

impl<S> Service<Request<Incoming>> for BunnerCsrf<S>
where
    S: Service<Request<Incoming>, Response = Response<CsrfBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CsrfBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let policy = self.policy.clone();
        let decision = policy.check(&RequestContext {
            method: req.method().as_str(),
            sec_fetch_site: header_value(req.headers(), header::SEC_FETCH_SITE),
            origin: header_value(req.headers(), header::ORIGIN),
        });

        if let Some(rejection) = decision.rejection() {
            return Box::pin(async move {
                let mut response = rejection_response(rejection);
                apply_vary(&policy, response.headers_mut());
                Ok(response)
            });
        }

        let inner = self.inner.clone();
        Box::pin(async move {
            let mut response = inner.call(req).await?;
            apply_vary(&policy, response.headers_mut());
            Ok(response)
        })
    }
}

fn rejection_response(rejection: Rejection) -> Response<CsrfBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(rejection.body.as_bytes())));
    *response.status_mut() = StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
    response
}

fn apply_vary(policy: &CsrfPolicy, map: &mut HeaderMap) {
    let existing = map
        .get_all(VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(", ");
    let vary = policy
        .annotate((!existing.is_empty()).then_some(existing.as_str()))
        .into_owned();

    if let Ok(value) = HeaderValue::from_str(&vary) {
        map.insert(VARY, value);
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
