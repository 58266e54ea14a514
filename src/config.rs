//! Application configuration loaded from environment variables.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// A `.env` file in the working directory is honored. Every field has a
/// default, so a plain `btc-dash` invocation needs no environment at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Diagnostics ===
    /// Write diagnostic logs to a per-run file.
    #[serde(default)]
    pub enable_logging: bool,

    /// Directory for diagnostic log files.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// EnvFilter directive applied to the log file.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    // === Loop Timing ===
    /// Seconds to sleep between refresh cycles.
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u64,

    /// Per-request HTTP timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Upstream Endpoints ===
    /// BTC spot price endpoint.
    #[serde(default = "default_price_url")]
    pub price_url: String,

    /// Coin info endpoint (carries the all-time-high).
    #[serde(default = "default_coin_info_url")]
    pub coin_info_url: String,

    /// Time-ranged price series endpoint for the 200-day moving average.
    #[serde(default = "default_market_chart_url")]
    pub market_chart_url: String,

    /// Fear & Greed index endpoint.
    #[serde(default = "default_fear_greed_url")]
    pub fear_greed_url: String,

    /// Recommended transfer fees endpoint.
    #[serde(default = "default_fees_url")]
    pub fees_url: String,
}

fn default_log_dir() -> String {
    "/tmp/btc_dash".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_refresh_seconds() -> u64 {
    1800
}

fn default_http_timeout_ms() -> u64 {
    3000
}

fn default_price_url() -> String {
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd".to_string()
}

fn default_coin_info_url() -> String {
    "https://api.coingecko.com/api/v3/coins/bitcoin".to_string()
}

fn default_market_chart_url() -> String {
    "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart/range".to_string()
}

fn default_fear_greed_url() -> String {
    "https://api.alternative.me/fng/?limit=1".to_string()
}

fn default_fees_url() -> String {
    "https://mempool.space/api/v1/fees/recommended".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.refresh_seconds == 0 {
            return Err("REFRESH_SECONDS must be greater than zero".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than zero".to_string());
        }

        let endpoints = [
            ("PRICE_URL", &self.price_url),
            ("COIN_INFO_URL", &self.coin_info_url),
            ("MARKET_CHART_URL", &self.market_chart_url),
            ("FEAR_GREED_URL", &self.fear_greed_url),
            ("FEES_URL", &self.fees_url),
        ];

        for (name, url) in endpoints {
            if url.is_empty() {
                return Err(format!("{name} must not be empty"));
            }
        }

        Ok(())
    }

    /// Sleep interval between refresh cycles.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds)
    }

    /// Per-request timeout.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_logging: false,
            log_dir: default_log_dir(),
            rust_log: default_log_level(),
            refresh_seconds: default_refresh_seconds(),
            http_timeout_ms: default_http_timeout_ms(),
            price_url: default_price_url(),
            coin_info_url: default_coin_info_url(),
            market_chart_url: default_market_chart_url(),
            fear_greed_url: default_fear_greed_url(),
            fees_url: default_fees_url(),
        }
    }
}
