use std::sync::Arc;

use crate::config::Config;
use crate::contact::client::ContactClient;
use crate::content::SiteContent;
use crate::pdf::BrowserLauncher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Localized content, loaded once at startup.
    pub content: Arc<SiteContent>,
    /// Pluggable browser backend. Default: ChromiumLauncher.
    pub browser: Arc<dyn BrowserLauncher>,
    pub contact: ContactClient,
}

#[cfg(test)]
impl AppState {
    /// State over the embedded content with the given browser double.
    pub fn for_tests(browser: Arc<dyn BrowserLauncher>) -> Self {
        let config = Config::from_lookup(|_| None).expect("default config");
        Self {
            contact: ContactClient::new(None),
            content: Arc::new(SiteContent::load().expect("embedded content")),
            browser,
            config,
        }
    }
}
