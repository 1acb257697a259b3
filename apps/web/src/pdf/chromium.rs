//! Chromium driver over the DevTools protocol (`chromiumoxide`).

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventLifecycleEvent, NavigateParams, PrintToPdfParams, SetLifecycleEventsEnabledParams,
};
use chromiumoxide::Page;
use futures::StreamExt;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::BrowserEnvironment;
use crate::pdf::{BrowserLauncher, BrowserSession, PdfError, PdfOptions};

/// Lifecycle event Chromium emits once no requests have been in flight for 500ms.
const NETWORK_IDLE: &str = "networkIdle";

/// Extra flags for the trimmed serverless Chromium build.
const SERVERLESS_ARGS: &[&str] = &[
    "--single-process",
    "--no-zygote",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--hide-scrollbars",
    "--mute-audio",
];

const LOCAL_ARGS: &[&str] = &["--disable-gpu", "--hide-scrollbars"];

/// Launches a fresh headless Chromium per export.
pub struct ChromiumLauncher {
    environment: BrowserEnvironment,
    request_timeout: Duration,
}

impl ChromiumLauncher {
    pub fn new(environment: BrowserEnvironment, request_timeout: Duration) -> Self {
        Self {
            environment,
            request_timeout,
        }
    }

    fn browser_config(&self, user_data_dir: &Path) -> Result<BrowserConfig, PdfError> {
        let mut builder = BrowserConfig::builder()
            .request_timeout(self.request_timeout)
            .user_data_dir(user_data_dir);

        builder = match &self.environment {
            BrowserEnvironment::Serverless { executable } => builder
                .chrome_executable(executable)
                .no_sandbox()
                .args(SERVERLESS_ARGS.iter().copied()),
            BrowserEnvironment::Local { executable } => {
                let builder = builder.args(LOCAL_ARGS.iter().copied());
                match executable {
                    Some(path) => builder.chrome_executable(path),
                    // falls back to chromiumoxide's search of the usual install locations
                    None => builder,
                }
            }
        };

        builder.build().map_err(PdfError::Launch)
    }
}

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, PdfError> {
        // Concurrent exports must not share a profile directory.
        let profile = profile_dir()?;
        let config = self.browser_config(profile.path())?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| PdfError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("Chromium launched ({:?})", self.environment);

        Ok(Box::new(ChromiumSession {
            browser,
            handler_task,
            page: None,
            profile: Some(profile),
        }))
    }
}

/// Fresh, uniquely named browser profile. Deleted when the guard drops.
fn profile_dir() -> Result<TempDir, PdfError> {
    tempfile::Builder::new()
        .prefix("portfolio-pdf-")
        .tempdir()
        .map_err(|e| PdfError::Launch(format!("could not create browser profile: {e}")))
}

struct ChromiumSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Option<Page>,
    profile: Option<TempDir>,
}

/// Covers sessions dropped without `close`, e.g. when the client disconnects
/// mid-export: the handler task stops, `Browser` kills its child process on
/// drop, and the `TempDir` guard removes the profile.
impl Drop for ChromiumSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

impl ChromiumSession {
    async fn open_and_wait_idle(&mut self, url: &str) -> Result<(), PdfError> {
        let nav_err = |e: chromiumoxide::error::CdpError| PdfError::Navigation(e.to_string());

        let page = self.browser.new_page("about:blank").await.map_err(nav_err)?;
        page.execute(SetLifecycleEventsEnabledParams::new(true))
            .await
            .map_err(nav_err)?;
        // Subscribe before navigating so the idle event cannot be missed.
        let mut lifecycle = page
            .event_listener::<EventLifecycleEvent>()
            .await
            .map_err(nav_err)?;

        let navigation = page
            .execute(NavigateParams::new(url))
            .await
            .map_err(nav_err)?;
        if let Some(error_text) = &navigation.result.error_text {
            return Err(PdfError::Navigation(error_text.clone()));
        }
        let loader_id = navigation.result.loader_id.clone();

        let mut idle = false;
        while let Some(event) = lifecycle.next().await {
            // Only the idle signal of this navigation counts, not a replay for about:blank.
            let same_document = loader_id.as_ref().map_or(true, |id| *id == event.loader_id);
            if event.name == NETWORK_IDLE && same_document {
                idle = true;
                break;
            }
        }
        if !idle {
            return Err(PdfError::Navigation(
                "tab closed before the network went idle".to_string(),
            ));
        }

        self.page = Some(page);
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> Result<(), PdfError> {
        debug!("Navigating headless tab to {url}");
        tokio::time::timeout(timeout, self.open_and_wait_idle(url))
            .await
            .map_err(|_| PdfError::Timeout(timeout))?
    }

    async fn print_pdf(&mut self, options: &PdfOptions) -> Result<Vec<u8>, PdfError> {
        let page = self
            .page
            .as_ref()
            .ok_or_else(|| PdfError::Render("no page loaded".to_string()))?;

        let params = PrintToPdfParams {
            print_background: Some(options.print_background),
            paper_width: Some(options.paper_width_in),
            paper_height: Some(options.paper_height_in),
            margin_top: Some(options.margin_in),
            margin_bottom: Some(options.margin_in),
            margin_left: Some(options.margin_in),
            margin_right: Some(options.margin_in),
            prefer_css_page_size: Some(options.prefer_css_page_size),
            ..Default::default()
        };

        page.pdf(params)
            .await
            .map_err(|e| PdfError::Render(e.to_string()))
    }

    async fn close(mut self: Box<Self>) -> Result<(), PdfError> {
        self.page.take();

        let closed = self
            .browser
            .close()
            .await
            .map(|_| ())
            .map_err(|e| PdfError::Close(e.to_string()));

        if closed.is_err() {
            // DevTools connection is gone; make sure the process is too.
            if let Some(Err(e)) = self.browser.kill().await {
                warn!("Killing Chromium failed: {e}");
            }
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Waiting for Chromium to exit failed: {e}");
        }
        self.handler_task.abort();

        if let Some(profile) = self.profile.take() {
            let path = profile.path().to_path_buf();
            if let Err(e) = profile.close() {
                debug!("Could not remove browser profile {}: {e}", path.display());
            }
        }

        closed
    }
}
