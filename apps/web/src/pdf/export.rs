use std::time::Instant;

use tracing::{info, warn};

use crate::pdf::{BrowserLauncher, BrowserSession, PdfError, PdfOptions};

/// Renders `url` to PDF with a freshly launched browser.
///
/// Lifecycle: idle → browser acquired → terminated. Once `launch` succeeds the
/// session is closed exactly once on every path; a close failure is logged and
/// never replaces the outcome of the render. No step is retried.
pub async fn export_pdf(
    launcher: &dyn BrowserLauncher,
    url: &str,
    options: &PdfOptions,
) -> Result<Vec<u8>, PdfError> {
    let started = Instant::now();
    let mut session = launcher.launch().await?;

    let result = render(session.as_mut(), url, options).await;

    if let Err(e) = session.close().await {
        warn!("Browser shutdown after export failed: {e}");
    }

    match &result {
        Ok(bytes) => info!(
            "Exported {url} to PDF ({} bytes) in {}ms",
            bytes.len(),
            started.elapsed().as_millis()
        ),
        Err(e) => warn!("PDF export of {url} failed: {e}"),
    }
    result
}

async fn render(
    session: &mut dyn BrowserSession,
    url: &str,
    options: &PdfOptions,
) -> Result<Vec<u8>, PdfError> {
    session.navigate(url, options.navigation_timeout).await?;
    let bytes = session.print_pdf(options).await?;
    if bytes.is_empty() {
        return Err(PdfError::EmptyDocument);
    }
    Ok(bytes)
}
