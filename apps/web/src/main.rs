mod config;
mod contact;
mod content;
mod errors;
mod i18n;
mod models;
mod pages;
mod pdf;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{BrowserEnvironment, Config};
use crate::contact::client::ContactClient;
use crate::content::SiteContent;
use crate::pdf::ChromiumLauncher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio web v{}", env!("CARGO_PKG_VERSION"));

    // Embedded bundles; an incomplete one stops startup here
    let content = Arc::new(SiteContent::load()?);

    match &config.browser {
        BrowserEnvironment::Serverless { executable } => {
            info!("PDF browser: serverless build at {}", executable.display())
        }
        BrowserEnvironment::Local { executable: Some(path) } => {
            info!("PDF browser: local install at {}", path.display())
        }
        BrowserEnvironment::Local { executable: None } => {
            info!("PDF browser: local install (auto-detected)")
        }
    }
    let browser = Arc::new(ChromiumLauncher::new(
        config.browser.clone(),
        config.pdf_navigation_timeout,
    ));

    let contact = ContactClient::new(config.contact_webhook_url.clone());
    if config.contact_webhook_url.is_none() {
        info!("CONTACT_WEBHOOK_URL not set; contact messages are only logged");
    }

    let state = AppState {
        config: config.clone(),
        content,
        browser,
        contact,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
