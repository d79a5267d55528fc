use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header::VARY},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bunner_csrf_rs::{CsrfPolicy, RequestContext, constants::header};

use super::AppState;

pub async fn csrf_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let policy = state.policy.clone();

    let decision = {
        let headers = request.headers();
        policy.check(&RequestContext {
            method: request.method().as_str(),
            sec_fetch_site: header_value(headers, header::SEC_FETCH_SITE),
            origin: header_value(headers, header::ORIGIN),
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

    apply_vary(&policy, response.headers_mut());
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
