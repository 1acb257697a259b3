//! Site content keyed by locale, and lookups of resume/cover-letter variants.
//!
//! Built once at startup and shared read-only through `AppState`.

use std::collections::HashMap;

use anyhow::{bail, Result};
use tracing::info;

use crate::i18n::messages::{load_messages, Messages};
use crate::i18n::Locale;
use crate::models::{CoverLetterConfig, ResumeConfig, ResumeType};

#[derive(Debug, Clone)]
pub struct SiteContent {
    bundles: HashMap<Locale, Messages>,
}

impl SiteContent {
    /// Loads every embedded bundle and checks that all variants are present.
    pub fn load() -> Result<Self> {
        let mut bundles = HashMap::new();
        for locale in Locale::ALL {
            bundles.insert(locale, load_messages(locale)?);
        }
        let content = Self::from_bundles(bundles)?;
        info!(
            "Site content loaded: {} locales, {} variants each",
            Locale::ALL.len(),
            ResumeType::ALL.len()
        );
        Ok(content)
    }

    /// Builds content from already-parsed bundles.
    /// Fails unless every (variant, locale) pair resolves for both document kinds.
    pub fn from_bundles(bundles: HashMap<Locale, Messages>) -> Result<Self> {
        for locale in Locale::ALL {
            let Some(messages) = bundles.get(&locale) else {
                bail!("Missing message bundle for locale '{locale}'");
            };
            for ty in ResumeType::ALL {
                if !messages.resume.variants.contains_key(&ty) {
                    bail!("Bundle '{locale}' has no resume variant '{ty}'");
                }
                if !messages.cover_letter.variants.contains_key(&ty) {
                    bail!("Bundle '{locale}' has no cover letter variant '{ty}'");
                }
            }
        }
        Ok(Self { bundles })
    }

    pub fn messages(&self, locale: Locale) -> &Messages {
        // from_bundles guarantees every locale is present
        &self.bundles[&locale]
    }

    pub fn resume(&self, ty: ResumeType, locale: Locale) -> Option<&ResumeConfig> {
        self.bundles.get(&locale)?.resume.variants.get(&ty)
    }

    pub fn cover_letter(&self, ty: ResumeType, locale: Locale) -> Option<&CoverLetterConfig> {
        self.bundles.get(&locale)?.cover_letter.variants.get(&ty)
    }
}
