use anyhow::Context;

const DEFAULT_BASE_URL: &str = "https://api.flutterwave.com/v3";

/// Process configuration, read from the environment once at startup and
/// passed to handlers through the router state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the Flutterwave API.
    pub flw_secret_key: String,
    /// Shared secret the `flutterwave-signature` webhook header must match.
    pub flw_secret_hash: String,
    /// Default payment `callback_url` when the caller does not supply one.
    pub webhook_url: Option<String>,
    /// Upstream base URL.
    pub flw_base_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let flw_secret_key =
            std::env::var("FLW_SECRET_KEY").context("FLW_SECRET_KEY is not set")?;
        let flw_secret_hash =
            std::env::var("FLW_SECRET_HASH").context("FLW_SECRET_HASH is not set")?;
        let webhook_url = std::env::var("WEBHOOK_URL").ok();
        let flw_base_url =
            std::env::var("FLW_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);

        Ok(Self {
            flw_secret_key,
            flw_secret_hash,
            webhook_url,
            flw_base_url,
            port,
        })
    }
}
