use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::paths;

/// Booking step a route belongs to.
#[must_use]
pub fn flow(route: Option<&str>) -> &'static str {
    match route {
        Some(paths::IDENTIFY) => "identify",
        Some(paths::BOOKING) => "browse",
        Some(paths::BOOK) => "book",
        Some(paths::HEALTH) => "health",
        _ => "unmatched",
    }
}

#[must_use]
pub fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "error"
    } else if status.is_client_error() {
        "client_error"
    } else if status.is_redirection() {
        "redirect"
    } else {
        "success"
    }
}

/// Redirect target without its query string, which carries the national ID.
fn redirect_target(response: &Response) -> Option<String> {
    let location = response.headers().get(header::LOCATION)?.to_str().ok()?;
    Some(location.split('?').next().unwrap_or(location).to_string())
}

/// Request span and completion event.
///
/// Installed as a route layer so `MatchedPath` is known. Only the path is
/// logged, never the query, as browse URLs contain the citizen's national ID.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let step = flow(route.as_deref());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        route = route.as_deref().unwrap_or("-"),
        flow = step,
    );

    async move {
        let response = next.run(req).await;

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let status = response.status();
        let redirect_to = redirect_target(&response);

        info!(
            event = "http_request_finished",
            duration_ms = duration_ms,
            status_code = status.as_u16(),
            outcome = outcome(status),
            redirect_to = redirect_to.as_deref(),
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Pages show names and national IDs, so nothing is cached or framed.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; style-src 'self' 'unsafe-inline'; form-action 'self'; frame-ancestors 'none'; base-uri 'self'",
        ),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::{IntoResponse, Redirect};

    #[test]
    fn routes_map_to_booking_steps() {
        assert_eq!(flow(Some("/")), "identify");
        assert_eq!(flow(Some("/booking")), "browse");
        assert_eq!(flow(Some("/book")), "book");
        assert_eq!(flow(Some("/health")), "health");
        assert_eq!(flow(None), "unmatched");
    }

    #[test]
    fn redirects_have_their_own_outcome() {
        assert_eq!(outcome(StatusCode::SEE_OTHER), "redirect");
        assert_eq!(outcome(StatusCode::OK), "success");
        assert_eq!(outcome(StatusCode::BAD_REQUEST), "client_error");
        assert_eq!(outcome(StatusCode::INTERNAL_SERVER_ERROR), "error");
    }

    #[test]
    fn redirect_target_drops_query() {
        let response =
            Redirect::to("/booking?national_id=010101300000&doctor_id=1").into_response();
        assert_eq!(redirect_target(&response).as_deref(), Some("/booking"));

        let response = StatusCode::OK.into_response();
        assert_eq!(redirect_target(&response), None);
    }
}
