//! Contact form: server-side validation and delivery of visitor messages.

pub mod client;
pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::i18n::messages::ContactErrorMessages;

const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=100;
const MESSAGE_LEN: std::ops::RangeInclusive<usize> = 10..=2000;
const EMAIL_MAX_LEN: usize = 254;

/// Raw form submission, as posted by the modal (JSON) or the no-JS form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A submission that passed validation. Fields are trimmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Checks a submission, collecting one localized error per invalid field.
pub fn validate_contact(
    form: &ContactForm,
    errors: &ContactErrorMessages,
) -> Result<ValidContact, Vec<FieldError>> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let mut problems = Vec::new();

    if !NAME_LEN.contains(&name.chars().count()) {
        problems.push(FieldError {
            field: "name",
            message: errors.name_length.clone(),
        });
    }
    if !is_valid_email(email) {
        problems.push(FieldError {
            field: "email",
            message: errors.email_invalid.clone(),
        });
    }
    if !MESSAGE_LEN.contains(&message.chars().count()) {
        problems.push(FieldError {
            field: "message",
            message: errors.message_length.clone(),
        });
    }

    if !problems.is_empty() {
        return Err(problems);
    }

    Ok(ValidContact {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Pragmatic address check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors() -> ContactErrorMessages {
        ContactErrorMessages {
            name_length: "name".to_string(),
            email_invalid: "email".to_string(),
            message_length: "message".to_string(),
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let valid = validate_contact(
            &form("  Jane Doe ", " jane@example.com", "Hello there, nice site!  "),
            &errors(),
        )
        .unwrap();
        assert_eq!(valid.name, "Jane Doe");
        assert_eq!(valid.email, "jane@example.com");
        assert_eq!(valid.message, "Hello there, nice site!");
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let problems = validate_contact(&form("J", "not-an-email", "short"), &errors()).unwrap_err();
        let fields: Vec<&str> = problems.iter().map(|p| p.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_length_limits_count_characters_not_bytes() {
        // 50 two-byte characters is within the 100 character limit
        let name = "ü".repeat(50);
        assert!(validate_contact(
            &form(&name, "a@b.de", "A long enough message"),
            &errors()
        )
        .is_ok());

        let long_message = "x".repeat(2001);
        assert!(validate_contact(&form("Jane", "a@b.de", &long_message), &errors()).is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+site@mail.example.co.uk"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane@example..com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email(""));
    }
}
