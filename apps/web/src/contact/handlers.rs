use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde_json::{json, Value};

use crate::contact::{validate_contact, ContactForm};
use crate::errors::AppError;
use crate::i18n::Locale;
use crate::pages::home::{render_home, ContactBanner, ContactFormState};
use crate::state::AppState;

/// POST /:locale/api/contact
pub async fn handle_contact_api(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, AppError> {
    let locale: Locale = locale
        .parse()
        .map_err(|e: crate::i18n::UnknownLocale| AppError::NotFound(e.to_string()))?;
    let messages = state.content.messages(locale);

    let contact = validate_contact(&form, &messages.contact.errors).map_err(|errors| {
        let details = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        AppError::bad_request("Validation failed", details)
    })?;

    let id = state.contact.deliver(&contact, locale).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

/// POST /:locale/contact
///
/// Form fallback for clients without JavaScript. Answers with the home page,
/// carrying either the outcome banner or the field errors and previous input.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let locale: Locale = locale
        .parse()
        .map_err(|e: crate::i18n::UnknownLocale| AppError::NotFound(e.to_string()))?;
    let messages = state.content.messages(locale);

    let (status, form_state) = match validate_contact(&form, &messages.contact.errors) {
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactFormState {
                values: form,
                errors,
                banner: None,
            },
        ),
        Ok(contact) => match state.contact.deliver(&contact, locale).await {
            Ok(_) => (
                StatusCode::OK,
                ContactFormState {
                    banner: Some(ContactBanner::Sent),
                    ..Default::default()
                },
            ),
            Err(e) => {
                tracing::error!("Contact form delivery failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    ContactFormState {
                        values: form,
                        errors: Vec::new(),
                        banner: Some(ContactBanner::Failed),
                    },
                )
            }
        },
    };

    Ok((status, Html(render_home(locale, messages, form_state))).into_response())
}
