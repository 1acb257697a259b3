//! Contact delivery client. Forwards validated submissions to the configured
//! webhook (mail relay, form service or chat hook).
//!
//! Without a webhook the submission is only logged.
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::contact::ValidContact;
use crate::errors::AppError;
use crate::i18n::Locale;

const DELIVERY_TIMEOUT_SECS: u64 = 10;

/// Payload posted to the webhook.
#[derive(Debug, Serialize)]
pub struct ContactSubmission<'a> {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub locale: Locale,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Clone)]
pub struct ContactClient {
    client: Client,
    webhook_url: Option<String>,
}

impl ContactClient {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(DELIVERY_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            webhook_url,
        }
    }

    /// Delivers one submission. Single attempt; returns the submission id.
    pub async fn deliver(&self, contact: &ValidContact, locale: Locale) -> Result<Uuid, AppError> {
        let submission = ContactSubmission {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            locale,
            name: &contact.name,
            email: &contact.email,
            message: &contact.message,
        };

        let Some(url) = &self.webhook_url else {
            info!(
                "Contact message {} received (no webhook configured)",
                submission.id
            );
            debug!("Contact message {} sender: {}", submission.id, submission.email);
            return Ok(submission.id);
        };

        let response = self
            .client
            .post(url)
            .json(&submission)
            .send()
            .await
            .map_err(|e| AppError::Delivery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Contact webhook returned {status}: {body}");
            return Err(AppError::Delivery(format!("webhook returned {status}")));
        }

        info!("Contact message {} delivered", submission.id);
        Ok(submission.id)
    }
}
