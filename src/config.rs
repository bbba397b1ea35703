use anyhow::{Context, Result};

use crate::codes::DEFAULT_CODE_LENGTH;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL used when generating short links, e.g. "https://go.example.com"
    /// Must NOT have a trailing slash.
    pub base_url: String,

    /// How many hex characters of the digest make up a short code (1–32).
    /// Raising this shrinks the collision space at the cost of longer links.
    pub code_length: usize,

    /// Whether the plain-text /db inspection route is mounted.
    /// Development aid only; defaults to off.
    /// Set INSPECT_ROUTES=1 in the environment to enable.
    pub inspect_enabled: bool,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        let base_url = std::env::var("BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_owned();

        let code_length = std::env::var("CODE_LENGTH")
            .unwrap_or_else(|_| DEFAULT_CODE_LENGTH.to_string())
            .parse::<usize>()
            .context("CODE_LENGTH must be a number")?;
        if !(1..=32).contains(&code_length) {
            anyhow::bail!("CODE_LENGTH must be between 1 and 32 (hex characters of a 128-bit digest)");
        }

        let inspect_enabled = std::env::var("INSPECT_ROUTES")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            base_url,
            code_length,
            inspect_enabled,
        })
    }
}
