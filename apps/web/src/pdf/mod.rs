//! PDF export: renders the site's own resume/cover-letter pages to PDF
//! through a headless browser.
//!
//! The browser sits behind the `BrowserLauncher` / `BrowserSession` seam so the
//! export flow can be driven by Chromium in production and by doubles in tests.
//! `AppState` carries an `Arc<dyn BrowserLauncher>`.

pub mod chromium;
pub mod export;
pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use chromium::ChromiumLauncher;
pub use export::export_pdf;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("page did not settle within {0:?}")]
    Timeout(Duration),

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("browser shutdown failed: {0}")]
    Close(String),

    #[error("browser produced an empty document")]
    EmptyDocument,
}

impl PdfError {
    /// Client-facing message. Never includes URLs, paths or browser output.
    pub fn redacted(&self) -> String {
        match self {
            PdfError::Launch(_) => "The headless browser could not be started".to_string(),
            PdfError::Navigation(_) => "The page could not be loaded".to_string(),
            PdfError::Timeout(d) => {
                format!("The page did not finish loading within {}s", d.as_secs())
            }
            PdfError::Render(_) => "The page could not be printed".to_string(),
            PdfError::Close(_) => "The headless browser did not shut down cleanly".to_string(),
            PdfError::EmptyDocument => "The browser returned an empty document".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Print options
// ────────────────────────────────────────────────────────────────────────────

/// Page setup handed to the browser's print-to-PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub paper_width_in: f64,
    pub paper_height_in: f64,
    pub margin_in: f64,
    pub print_background: bool,
    /// `false` lets content flow over as many pages as it needs.
    pub prefer_css_page_size: bool,
    pub navigation_timeout: Duration,
}

impl PdfOptions {
    /// A4 portrait, backgrounds on, 0.4in (≈1cm) margins on every side.
    pub fn a4(navigation_timeout: Duration) -> Self {
        Self {
            paper_width_in: 8.27,
            paper_height_in: 11.69,
            margin_in: 0.4,
            print_background: true,
            prefer_css_page_size: false,
            navigation_timeout,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Browser seam
// ────────────────────────────────────────────────────────────────────────────

/// Starts one browser process per call. Implementations must not share
/// processes between calls.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, PdfError>;
}

/// A running browser owned by exactly one export.
#[async_trait]
pub trait BrowserSession: Send {
    /// Opens a tab on `url` and waits until the network is idle.
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<(), PdfError>;

    /// Prints the currently loaded page.
    async fn print_pdf(&mut self, options: &PdfOptions) -> Result<Vec<u8>, PdfError>;

    /// Terminates the browser process.
    async fn close(self: Box<Self>) -> Result<(), PdfError>;
}
