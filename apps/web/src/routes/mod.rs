pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::i18n::middleware::locale_prefix_middleware;
use crate::pages::handlers as pages;
use crate::pdf::handlers as pdf;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/static/site.css", get(pages::handle_stylesheet))
        // Pages
        .route("/:locale", get(pages::handle_home))
        .route("/:locale/resume/:type", get(pages::handle_resume_page))
        .route(
            "/:locale/cover-letter/:type",
            get(pages::handle_cover_letter_page),
        )
        .route("/:locale/contact", post(contact::handle_contact_form))
        // JSON / binary API
        .route("/:locale/api/resume-pdf/:type", get(pdf::handle_resume_pdf))
        .route(
            "/:locale/api/cover-letter-pdf/:type",
            get(pdf::handle_cover_letter_pdf),
        )
        .route("/:locale/api/contact", post(contact::handle_contact_api))
        .fallback(pages::handle_not_found)
        .layer(middleware::from_fn(locale_prefix_middleware))
        .with_state(state)
}
