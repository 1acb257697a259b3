//! Axum route handlers for the PDF export API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::models::{DocumentKind, ResumeType};
use crate::pdf::{export_pdf, PdfOptions};
use crate::state::AppState;

/// GET /:locale/api/resume-pdf/:type
pub async fn handle_resume_pdf(
    State(state): State<AppState>,
    Path((locale, ty)): Path<(String, String)>,
) -> Result<Response, AppError> {
    export_document(&state, DocumentKind::Resume, &locale, &ty).await
}

/// GET /:locale/api/cover-letter-pdf/:type
pub async fn handle_cover_letter_pdf(
    State(state): State<AppState>,
    Path((locale, ty)): Path<(String, String)>,
) -> Result<Response, AppError> {
    export_document(&state, DocumentKind::CoverLetter, &locale, &ty).await
}

async fn export_document(
    state: &AppState,
    kind: DocumentKind,
    locale: &str,
    ty: &str,
) -> Result<Response, AppError> {
    let locale: Locale = locale
        .parse()
        .map_err(|e: crate::i18n::UnknownLocale| AppError::NotFound(e.to_string()))?;
    let ty: ResumeType = ty.parse().map_err(|e: crate::models::resume::UnknownResumeType| {
        let error = match kind {
            DocumentKind::Resume => "Invalid resume type",
            DocumentKind::CoverLetter => "Invalid cover letter type",
        };
        AppError::bad_request(error, e.to_string())
    })?;

    let found = match kind {
        DocumentKind::Resume => state.content.resume(ty, locale).is_some(),
        DocumentKind::CoverLetter => state.content.cover_letter(ty, locale).is_some(),
    };
    if !found {
        return Err(AppError::NotFound(format!(
            "Configuration not found for {ty}/{locale}"
        )));
    }

    let url = internal_page_url(&state.config.loopback_authority(), kind, ty, locale);
    let options = PdfOptions::a4(state.config.pdf_navigation_timeout);
    info!("Exporting {} {ty}/{locale} from {url}", kind.page_segment());

    let pdf = export_pdf(state.browser.as_ref(), &url, &options).await?;

    let slug = state.content.messages(locale).profile.file_slug();
    let filename = pdf_filename(&slug, ty, kind, locale);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate".to_string(),
            ),
            (header::PRAGMA, "no-cache".to_string()),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// URL of this server's own print view of the document.
///
/// Always the loopback listener: request headers never choose where the
/// browser goes.
pub fn internal_page_url(
    loopback_authority: &str,
    kind: DocumentKind,
    ty: ResumeType,
    locale: Locale,
) -> String {
    format!(
        "http://{loopback_authority}/{locale}/{}/{ty}?print=1",
        kind.page_segment()
    )
}

/// `<name>-<type>-resume-<locale>.pdf` or `<name>-<type>-cover-letter-<locale>.pdf`.
pub fn pdf_filename(name_slug: &str, ty: ResumeType, kind: DocumentKind, locale: Locale) -> String {
    format!("{name_slug}-{ty}-{}-{locale}.pdf", kind.page_segment())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::pdf::testing::{FailAt, MockLauncher, FAKE_PDF};
    use crate::routes::build_router;

    fn app(launcher: Arc<MockLauncher>) -> axum::Router {
        build_router(AppState::for_tests(launcher))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri)
            .header(header::HOST, "localhost:3000")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_every_declared_pair_returns_a_pdf() {
        for locale in Locale::ALL {
            for ty in ResumeType::ALL {
                let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
                let res = app(launcher.clone())
                    .oneshot(get(&format!("/{locale}/api/resume-pdf/{ty}")))
                    .await
                    .unwrap();

                assert_eq!(res.status(), StatusCode::OK, "{ty}/{locale}");
                assert_eq!(res.headers()[header::CONTENT_TYPE], "application/pdf");
                let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
                assert!(
                    disposition.ends_with(&format!("-{ty}-resume-{locale}.pdf\"")),
                    "unexpected disposition {disposition}"
                );
                assert!(disposition.starts_with("attachment"));
                let body = body_bytes(res).await;
                assert!(!body.is_empty());
                assert_eq!(&body[..], FAKE_PDF);
            }
        }
    }

    #[tokio::test]
    async fn test_german_backend_filename() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let res = app(launcher)
            .oneshot(get("/de/api/resume-pdf/backend"))
            .await
            .unwrap();
        let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.contains("backend-resume-de.pdf"));
        assert_eq!(
            disposition,
            "attachment; filename=\"alex-morgan-backend-resume-de.pdf\""
        );
    }

    #[tokio::test]
    async fn test_caching_is_disabled() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let res = app(launcher)
            .oneshot(get("/en/api/resume-pdf/frontend"))
            .await
            .unwrap();
        let cache = res.headers()[header::CACHE_CONTROL].to_str().unwrap();
        assert!(cache.contains("no-store"));
        assert_eq!(res.headers()[header::PRAGMA], "no-cache");
    }

    #[tokio::test]
    async fn test_unknown_type_is_400_without_browser_launch() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let res = app(launcher.clone())
            .oneshot(get("/en/api/resume-pdf/unknown"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body["error"], "Invalid resume type");
        assert!(body["details"].as_str().unwrap().contains("unknown"));
        assert_eq!(launcher.calls.launches(), 0);
    }

    #[tokio::test]
    async fn test_unknown_locale_is_json_404_without_browser_launch() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let res = app(launcher.clone())
            .oneshot(get("/fr/api/resume-pdf/backend"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json"));
        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body["error"], "Not found");
        assert!(body["details"].as_str().unwrap().contains("fr"));
        assert_eq!(launcher.calls.launches(), 0);
    }

    #[tokio::test]
    async fn test_navigation_failure_is_500_and_closes_browser_once() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Navigate));
        let res = app(launcher.clone())
            .oneshot(get("/en/api/resume-pdf/fullstack"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body["error"], "Failed to generate PDF");
        assert!(!body["details"]
            .as_str()
            .unwrap()
            .contains("ERR_CONNECTION_REFUSED"));
        assert_eq!(launcher.calls.launches(), 1);
        assert_eq!(launcher.calls.closes(), 1);
    }

    #[tokio::test]
    async fn test_launch_failure_is_500() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Launch));
        let res = app(launcher.clone())
            .oneshot(get("/en/api/resume-pdf/backend"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(launcher.calls.closes(), 0);
    }

    #[tokio::test]
    async fn test_repeated_requests_use_independent_browsers() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let router = app(launcher.clone());
        for _ in 0..2 {
            let res = router
                .clone()
                .oneshot(get("/de/api/resume-pdf/backend"))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        }
        assert_eq!(launcher.calls.launches(), 2);
        assert_eq!(launcher.calls.closes(), 2);
    }

    #[tokio::test]
    async fn test_browser_loads_print_view_on_loopback() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        app(launcher.clone())
            .oneshot(get("/de/api/resume-pdf/backend"))
            .await
            .unwrap();
        assert_eq!(
            launcher.calls.urls(),
            vec!["http://127.0.0.1:3000/de/resume/backend?print=1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cover_letter_export() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let res = app(launcher.clone())
            .oneshot(get("/en/api/cover-letter-pdf/frontend"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.contains("frontend-cover-letter-en.pdf"));
        assert_eq!(
            launcher.calls.urls(),
            vec!["http://127.0.0.1:3000/en/cover-letter/frontend?print=1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_foreign_host_headers_do_not_redirect_the_browser() {
        let launcher = Arc::new(MockLauncher::new(FailAt::Nowhere));
        let res = app(launcher.clone())
            .oneshot(
                Request::get("/en/api/resume-pdf/backend")
                    .header(header::HOST, "169.254.169.254")
                    .header("x-forwarded-host", "internal.example:8080")
                    .header("x-forwarded-proto", "https")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            launcher.calls.urls(),
            vec!["http://127.0.0.1:3000/en/resume/backend?print=1".to_string()]
        );
    }

    #[test]
    fn test_internal_url_targets_loopback() {
        let url = internal_page_url(
            "127.0.0.1:3000",
            DocumentKind::CoverLetter,
            ResumeType::Backend,
            Locale::De,
        );
        assert_eq!(url, "http://127.0.0.1:3000/de/cover-letter/backend?print=1");
    }

    #[test]
    fn test_pdf_filename_segments() {
        assert_eq!(
            pdf_filename("alex-morgan", ResumeType::Backend, DocumentKind::Resume, Locale::De),
            "alex-morgan-backend-resume-de.pdf"
        );
        assert_eq!(
            pdf_filename("alex-morgan", ResumeType::Frontend, DocumentKind::CoverLetter, Locale::En),
            "alex-morgan-frontend-cover-letter-en.pdf"
        );
    }
}
