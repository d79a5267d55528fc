use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{CONTENT_TYPE, VARY};
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::csrf::middleware::CsrfBody;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Clone)]
pub struct Router;

pub fn router() -> Router {
    Router
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<CsrfBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let response = match (req.method(), req.uri().path()) {
            (&Method::GET, "/") => html("<h1>Welcome to the Hyper CSRF example!</h1>"),
            (&Method::POST, "/") => text(StatusCode::OK, "Form accepted"),
            _ => text(StatusCode::NOT_FOUND, "Not Found"),
        };

        Box::pin(async move { Ok(response) })
    }
}

fn html(body: &'static str) -> Response<CsrfBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    response.headers_mut().insert(
        CONTENT_TYPE,
        hyper::http::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response.headers_mut().insert(
        VARY,
        hyper::http::HeaderValue::from_static("Accept-Encoding"),
    );
    response
}

fn text(status: StatusCode, body: &'static str) -> Response<CsrfBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *response.status_mut() = status;
    response
}
