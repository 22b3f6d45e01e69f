use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{bail, Context};
use marketpulse_market_data::{YahooConfig, DEFAULT_WATCHLIST, DEFAULT_YAHOO_BASE_URL};

/// Log line format selected by `MP_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("expected `text` or `json`, got `{}`", other),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub yahoo_base_url: String,
    pub upstream_timeout: Duration,
    pub snapshot_path: PathBuf,
    pub snapshot_symbols: Vec<String>,
    /// Zero disables the in-process snapshot scheduler.
    pub snapshot_interval: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `.env` if present, then the `MP_*` process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys take
    /// their defaults; set but unparseable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let listen_addr: SocketAddr = var("MP_LISTEN_ADDR", "0.0.0.0:5000")
            .parse()
            .context("Invalid MP_LISTEN_ADDR")?;
        let cors_allow = split_list(&var("MP_CORS_ALLOW_ORIGINS", "*"));
        let timeout_ms: u64 = var("MP_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid MP_REQUEST_TIMEOUT_MS")?;
        let static_dir = var("MP_STATIC_DIR", "public");
        let yahoo_base_url = var("MP_YAHOO_BASE_URL", DEFAULT_YAHOO_BASE_URL);
        let upstream_timeout_ms: u64 = var("MP_UPSTREAM_TIMEOUT_MS", "10000")
            .parse()
            .context("Invalid MP_UPSTREAM_TIMEOUT_MS")?;
        if upstream_timeout_ms == 0 {
            bail!("MP_UPSTREAM_TIMEOUT_MS must be greater than zero");
        }
        let snapshot_path = PathBuf::from(var("MP_SNAPSHOT_PATH", "market_data.json"));
        let snapshot_symbols = split_list(&var(
            "MP_SNAPSHOT_SYMBOLS",
            &DEFAULT_WATCHLIST.join(","),
        ));
        if snapshot_symbols.is_empty() {
            bail!("MP_SNAPSHOT_SYMBOLS must list at least one symbol");
        }
        let interval_secs: u64 = var("MP_SNAPSHOT_INTERVAL_SECS", "0")
            .parse()
            .context("Invalid MP_SNAPSHOT_INTERVAL_SECS")?;

        let log_format: LogFormat = var("MP_LOG_FORMAT", "text")
            .parse()
            .context("Invalid MP_LOG_FORMAT")?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            yahoo_base_url,
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            snapshot_path,
            snapshot_symbols,
            snapshot_interval: Duration::from_secs(interval_secs),
            log_format,
        })
    }

    pub fn yahoo_config(&self) -> YahooConfig {
        YahooConfig {
            base_url: self.yahoo_base_url.clone(),
            timeout: self.upstream_timeout,
            ..Default::default()
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
