//! Minimal axum host wired through the two-phase contract, plus a raw
//! HTTP/1.1 client so exchanges are observed exactly as a browser would.

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use bunner_csrf_rs::constants::header as csrf_header;
use bunner_csrf_rs::{CsrfOptions, CsrfPolicy, RequestContext, TrustedOrigins};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const SUBMIT_BODY: &str = "submitted";
pub const CACHED_BODY: &str = "cached";

pub struct HostResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HostResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn vary_tokens(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(csrf_header::VARY))
            .flat_map(|(_, value)| value.split(','))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect()
    }
}

pub async fn spawn_host(trusted_origins: &[&str]) -> SocketAddr {
    let policy = Arc::new(
        CsrfPolicy::new(CsrfOptions {
            trusted_origins: TrustedOrigins::list(trusted_origins.iter().copied()),
        })
        .expect("valid CSRF configuration"),
    );

    let app = Router::new()
        .route("/submit", any(submit))
        .route("/cached", get(cached))
        .layer(middleware::from_fn_with_state(policy, csrf_guard));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test host");
    });
    addr
}

pub async fn send(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
) -> HostResponse {
    let mut raw = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nContent-Length: 0\r\n"
    );
    for (name, value) in headers {
        raw.push_str(&format!("{name}: {value}\r\n"));
    }
    raw.push_str("\r\n");

    let mut stream = TcpStream::connect(addr).await.expect("connect to host");
    stream
        .write_all(raw.as_bytes())
        .await
        .expect("write request");
    let mut buffer = Vec::new();
    stream
        .read_to_end(&mut buffer)
        .await
        .expect("read response");

    parse_response(&String::from_utf8(buffer).expect("utf-8 response"))
}

fn parse_response(raw: &str) -> HostResponse {
    let (head, body) = raw.split_once("\r\n\r\n").expect("response head");
    let mut lines = head.split("\r\n");
    let status = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .expect("status line");
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();

    HostResponse {
        status,
        headers,
        body: body.to_string(),
    }
}

async fn csrf_guard(State(policy): State<Arc<CsrfPolicy>>, request: Request, next: Next) -> Response {
    let decision = {
        let headers = request.headers();
        policy.check(&RequestContext {
            method: request.method().as_str(),
            sec_fetch_site: header_str(headers, csrf_header::SEC_FETCH_SITE),
            origin: header_str(headers, csrf_header::ORIGIN),
        })
    };

    let mut response = match decision.rejection() {
        Some(rejection) => (
            StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN),
            rejection.body,
        )
            .into_response(),
        None => next.run(request).await,
    };

    annotate_vary(&policy, response.headers_mut());
    response
}

fn annotate_vary(policy: &CsrfPolicy, headers: &mut HeaderMap) {
    let existing = headers
        .get_all(header::VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(", ");
    let annotated = policy
        .annotate((!existing.is_empty()).then_some(existing.as_str()))
        .into_owned();

    if let Ok(value) = HeaderValue::from_str(&annotated) {
        headers.insert(header::VARY, value);
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

async fn submit() -> &'static str {
    SUBMIT_BODY
}

async fn cached() -> impl IntoResponse {
    ([(header::VARY, "Accept-Encoding")], CACHED_BODY)
}
