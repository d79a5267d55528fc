use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderMap, HeaderValue, VARY};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse, error, web};
use bunner_csrf_rs::{CsrfPolicy, RequestContext, constants::header};

/// Wrap with `actix_web::middleware::from_fn(csrf_middleware)`; the policy is
/// read from `web::Data<CsrfPolicy>` app data.
pub async fn csrf_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let Some(policy) = req.app_data::<web::Data<CsrfPolicy>>().cloned() else {
        return Err(error::ErrorInternalServerError("CSRF policy is not registered"));
    };

    let decision = policy.check(&RequestContext {
        method: req.method().as_str(),
        sec_fetch_site: header_value(req.headers(), header::SEC_FETCH_SITE),
        origin: header_value(req.headers(), header::ORIGIN),
    });

    let mut response = match decision.rejection() {
        Some(rejection) => {
            let status = StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::FORBIDDEN);
            req.into_response(HttpResponse::build(status).body(rejection.body))
        }
        None => next.call(req).await?.map_into_boxed_body(),
    };

    apply_vary(&policy, response.headers_mut());
    Ok(response)
}

fn apply_vary(policy: &CsrfPolicy, map: &mut HeaderMap) {
    let existing = map
        .get_all(VARY)
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
