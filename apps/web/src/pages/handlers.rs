//! Axum route handlers for the server-rendered pages.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::i18n::middleware::is_api_path;
use crate::i18n::Locale;
use crate::models::ResumeType;
use crate::pages::home::{render_home, ContactFormState};
use crate::pages::resume::{render_cover_letter, render_resume};
use crate::pages::{render_not_found, SITE_CSS};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub print: Option<String>,
}

impl ViewQuery {
    fn is_print(&self) -> bool {
        matches!(self.print.as_deref(), Some("1") | Some("true"))
    }
}

/// GET /:locale
pub async fn handle_home(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    let Ok(locale) = locale.parse::<Locale>() else {
        return not_found(&state, Locale::DEFAULT, &format!("/{locale}"));
    };
    let messages = state.content.messages(locale);
    Html(render_home(locale, messages, ContactFormState::default())).into_response()
}

/// GET /:locale/resume/:type
pub async fn handle_resume_page(
    State(state): State<AppState>,
    Path((locale, ty)): Path<(String, String)>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let path = format!("/{locale}/resume/{ty}");
    let Ok(locale) = locale.parse::<Locale>() else {
        return not_found(&state, Locale::DEFAULT, &path);
    };
    let resolved = ty
        .parse::<ResumeType>()
        .ok()
        .and_then(|ty| state.content.resume(ty, locale).map(|config| (ty, config)));
    let Some((ty, config)) = resolved else {
        return not_found(&state, locale, &path);
    };

    let messages = state.content.messages(locale);
    Html(render_resume(locale, ty, config, messages, query.is_print())).into_response()
}

/// GET /:locale/cover-letter/:type
pub async fn handle_cover_letter_page(
    State(state): State<AppState>,
    Path((locale, ty)): Path<(String, String)>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let path = format!("/{locale}/cover-letter/{ty}");
    let Ok(locale) = locale.parse::<Locale>() else {
        return not_found(&state, Locale::DEFAULT, &path);
    };
    let resolved = ty
        .parse::<ResumeType>()
        .ok()
        .and_then(|ty| state.content.cover_letter(ty, locale).map(|config| (ty, config)));
    let Some((ty, config)) = resolved else {
        return not_found(&state, locale, &path);
    };

    let messages = state.content.messages(locale);
    Html(render_cover_letter(locale, ty, config, messages, query.is_print())).into_response()
}

/// Router fallback: JSON for API paths, otherwise the 404 page, localized
/// when the path starts with a known locale.
pub async fn handle_not_found(State(state): State<AppState>, uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        return AppError::NotFound(format!("No API route at {}", uri.path())).into_response();
    }
    let locale = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(|first| first.parse::<Locale>().ok())
        .unwrap_or(Locale::DEFAULT);
    not_found(&state, locale, uri.path())
}

/// GET /static/site.css
pub async fn handle_stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        SITE_CSS,
    )
}

fn not_found(state: &AppState, locale: Locale, path: &str) -> Response {
    let html = render_not_found(locale, state.content.messages(locale), path);
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::pdf::testing::{FailAt, MockLauncher};
    use crate::routes::build_router;

    fn app() -> axum::Router {
        build_router(AppState::for_tests(Arc::new(MockLauncher::new(
            FailAt::Nowhere,
        ))))
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let res = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page_per_locale() {
        let (status, html) = get("/en").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("lang=\"en\""));

        let (status, html) = get("/de").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("lang=\"de\""));
    }

    #[tokio::test]
    async fn test_every_resume_and_cover_letter_page_renders() {
        for locale in Locale::ALL {
            for ty in ResumeType::ALL {
                let (status, _) = get(&format!("/{locale}/resume/{ty}")).await;
                assert_eq!(status, StatusCode::OK, "resume {ty}/{locale}");
                let (status, _) = get(&format!("/{locale}/cover-letter/{ty}")).await;
                assert_eq!(status, StatusCode::OK, "cover letter {ty}/{locale}");
            }
        }
    }

    #[tokio::test]
    async fn test_print_query_selects_print_view() {
        let (_, html) = get("/en/resume/backend?print=1").await;
        assert!(html.contains("class=\"print\""));
        assert!(!html.contains("site-header"));
    }

    #[tokio::test]
    async fn test_unknown_variant_is_localized_404() {
        let (status, html) = get("/de/resume/designer").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Seite nicht gefunden"));
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_back_to_404_page() {
        let (status, html) = get("/en/nothing/here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_unmatched_api_path_is_json_404() {
        let res = app()
            .oneshot(Request::get("/fr/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let res = app()
            .oneshot(Request::get("/static/site.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css"));
    }

    #[test]
    fn test_print_flag_values() {
        let q = |v: Option<&str>| ViewQuery {
            print: v.map(str::to_string),
        };
        assert!(q(Some("1")).is_print());
        assert!(q(Some("true")).is_print());
        assert!(!q(Some("0")).is_print());
        assert!(!q(None).is_print());
    }
}
