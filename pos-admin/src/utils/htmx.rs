use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

pub const HX_REQUEST: &str = "hx-request";
pub const HX_REDIRECT: &str = "hx-redirect";
pub const HX_TRIGGER: &str = "hx-trigger";
pub const HX_CURRENT_URL: &str = "hx-current-url";

/// Client event asking an overlay menu to close itself.
pub const NAV_CLOSE_EVENT: &str = "nav-close";

pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// Client-side redirect: `HX-Redirect` for htmx requests, `303 See Other`
/// otherwise.
pub fn redirect(headers: &HeaderMap, to: &str) -> Response {
    if is_htmx(headers) {
        hx_redirect(to)
    } else {
        Redirect::to(to).into_response()
    }
}

pub fn hx_redirect(to: &str) -> Response {
    match HeaderValue::from_str(to) {
        Ok(location) => {
            let mut headers = HeaderMap::new();
            headers.insert(HX_REDIRECT, location);
            (StatusCode::OK, headers, "").into_response()
        }
        Err(_) => {
            tracing::error!(location = %to, "Refusing to redirect to invalid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Path component of the `HX-Current-URL` header, if present.
pub fn current_path(headers: &HeaderMap) -> Option<String> {
    let url = headers.get(HX_CURRENT_URL)?.to_str().ok()?;
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = match after_scheme.find('/') {
        Some(idx) if url.contains("://") => &after_scheme[idx..],
        Some(_) => after_scheme,
        None => "/",
    };
    let path = path.split(['?', '#']).next().unwrap_or("/");
    Some(path.to_string())
}
