use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::i18n::{negotiate_locale, Locale, LOCALE_COOKIE};

/// Paths served without a locale prefix.
const UNPREFIXED: &[&str] = &["/health", "/static/", "/favicon.ico"];

/// Redirects requests lacking a locale prefix to the negotiated locale.
///
/// `/resume/backend?x=1` becomes `307 → /de/resume/backend?x=1` for a German
/// browser. Prefixed and infrastructure paths pass through untouched, as do
/// `/<anything>/api/...` calls so an unknown locale is answered by the API
/// itself with a JSON 404.
pub async fn locale_prefix_middleware(req: Request, next: Next) -> Response {
    let path = req.uri().path();

    if has_locale_prefix(path) || is_unprefixed(path) || is_api_path(path) {
        return next.run(req).await;
    }

    let cookie = cookie_value(req.headers(), LOCALE_COOKIE);
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = negotiate_locale(cookie.as_deref(), accept_language);

    let mut target = if path == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{path}")
    };
    if let Some(query) = req.uri().query() {
        target.push('?');
        target.push_str(query);
    }
    debug!("Locale redirect {path} -> {target}");

    let mut response = Redirect::temporary(&target).into_response();
    let cookie = format!("{LOCALE_COOKIE}={locale}; Path=/; Max-Age=31536000; SameSite=Lax");
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

fn has_locale_prefix(path: &str) -> bool {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .is_some_and(|first| first.parse::<Locale>().is_ok())
}

/// `/<locale>/api/...`, whether or not the locale is supported.
pub fn is_api_path(path: &str) -> bool {
    path.trim_start_matches('/').split('/').nth(1) == Some("api")
}

fn is_unprefixed(path: &str) -> bool {
    UNPREFIXED
        .iter()
        .any(|p| if p.ends_with('/') { path.starts_with(p) } else { path == *p })
}

/// Reads one cookie from the `Cookie` request header(s).
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
}
