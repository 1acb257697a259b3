use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// How the headless browser executable is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEnvironment {
    /// Constrained function runtime: a trimmed, pre-packaged Chromium build.
    Serverless { executable: PathBuf },
    /// Regular host: a local Chrome/Chromium install, auto-detected when unset.
    Local { executable: Option<PathBuf> },
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub browser: BrowserEnvironment,
    pub pdf_navigation_timeout: Duration,
    pub contact_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let serverless = is_serverless(&lookup);
        let executable = lookup("CHROMIUM_EXECUTABLE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let browser = if serverless {
            BrowserEnvironment::Serverless {
                executable: executable.with_context(|| {
                    "Required environment variable 'CHROMIUM_EXECUTABLE_PATH' is not set \
                     (needed in serverless mode)"
                        .to_string()
                })?,
            }
        } else {
            BrowserEnvironment::Local { executable }
        };

        let timeout_secs = lookup("PDF_NAVIGATION_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("PDF_NAVIGATION_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            browser,
            pdf_navigation_timeout: Duration::from_secs(timeout_secs),
            contact_webhook_url: lookup("CONTACT_WEBHOOK_URL").filter(|u| !u.trim().is_empty()),
        })
    }

    /// Host the server can reach itself on when a request carries no `Host` header.
    pub fn loopback_authority(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

fn is_serverless<F>(lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(flag) = lookup("SERVERLESS") {
        return matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
    }
    lookup("AWS_LAMBDA_FUNCTION_NAME").is_some() || lookup("VERCEL").is_some()
}
