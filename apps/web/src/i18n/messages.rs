//! Per-locale message bundles. Each bundle is an embedded JSON document holding
//! both UI strings and the localized content records.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::models::{
    CoverLetterConfig, Hobby, NavItem, Profile, Project, ResumeConfig, ResumeType, Testimonial,
    ToolboxItem,
};

const EN_BUNDLE: &str = include_str!("../../messages/en.json");
const DE_BUNDLE: &str = include_str!("../../messages/de.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub meta: MetaMessages,
    pub common: CommonMessages,
    pub nav: Vec<NavItem>,
    pub profile: Profile,
    pub hero: HeroMessages,
    pub about: AboutMessages,
    pub projects: ProjectsMessages,
    pub testimonials: TestimonialsMessages,
    pub contact: ContactMessages,
    pub resume: ResumeMessages,
    pub cover_letter: CoverLetterMessages,
    pub not_found: NotFoundMessages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaMessages {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonMessages {
    pub language_name: String,
    pub switch_language: String,
    pub download_pdf: String,
    pub back_home: String,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroMessages {
    pub greeting: String,
    pub intro: String,
    pub cta_projects: String,
    pub cta_contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMessages {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub toolbox_title: String,
    pub toolbox: Vec<ToolboxItem>,
    pub hobbies_title: String,
    pub hobbies: Vec<Hobby>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsMessages {
    pub title: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsMessages {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessages {
    pub title: String,
    pub intro: String,
    pub name_label: String,
    pub email_label: String,
    pub message_label: String,
    pub submit: String,
    pub success: String,
    pub failure: String,
    pub errors: ContactErrorMessages,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactErrorMessages {
    pub name_length: String,
    pub email_invalid: String,
    pub message_length: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeHeadings {
    pub profile: String,
    pub skills: String,
    pub highlights: String,
    pub years: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMessages {
    pub headings: ResumeHeadings,
    pub variants: HashMap<ResumeType, ResumeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterMessages {
    pub variants: HashMap<ResumeType, CoverLetterConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundMessages {
    pub title: String,
    pub message: String,
}

/// Raw embedded bundle text for `locale`.
fn bundle_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_BUNDLE,
        Locale::De => DE_BUNDLE,
    }
}

/// Parses the embedded bundle for `locale`.
pub fn load_messages(locale: Locale) -> Result<Messages> {
    parse_messages(bundle_source(locale))
        .with_context(|| format!("Message bundle '{locale}' is malformed"))
}

pub fn parse_messages(source: &str) -> Result<Messages> {
    Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_bundle_parses() {
        for locale in Locale::ALL {
            let messages = load_messages(locale).unwrap();
            assert!(!messages.meta.title.is_empty(), "{locale} has no title");
        }
    }

    #[test]
    fn test_bundles_share_the_same_owner() {
        let en = load_messages(Locale::En).unwrap();
        let de = load_messages(Locale::De).unwrap();
        assert_eq!(en.profile.name, de.profile.name);
        assert_eq!(en.profile.email, de.profile.email);
    }

    #[test]
    fn test_bundles_are_actually_translated() {
        let en = load_messages(Locale::En).unwrap();
        let de = load_messages(Locale::De).unwrap();
        assert_ne!(en.contact.submit, de.contact.submit);
        assert_ne!(en.not_found.title, de.not_found.title);
    }

    #[test]
    fn test_malformed_bundle_is_an_error() {
        assert!(parse_messages("{\"meta\": {}}").is_err());
    }
}
