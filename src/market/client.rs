//! HTTP client for the upstream indicator APIs.

use chrono::Utc;
use tracing::{instrument, warn};

use crate::config::Config;
use crate::error::FetchError;
use crate::indicators::{mayer_multiple, FearGreed, FeeEstimates, Snapshot};

use super::types;

/// Trailing moving-average window in seconds (200 days).
const MA_WINDOW_SECS: i64 = 200 * 86_400;

/// Client for the five public indicator endpoints.
///
/// One bounded-timeout GET per metric, issued sequentially. Every
/// failure is logged and normalized to an absent value at this
/// boundary; nothing upstream-shaped ever escapes it.
#[derive(Debug, Clone)]
pub struct IndexClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// BTC spot price endpoint.
    price_url: String,
    /// Coin info endpoint.
    coin_info_url: String,
    /// Time-ranged price series endpoint.
    market_chart_url: String,
    /// Fear & Greed endpoint.
    fear_greed_url: String,
    /// Recommended fees endpoint.
    fees_url: String,
}

impl IndexClient {
    /// Create a new client from config with the bounded request timeout.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            price_url: config.price_url.clone(),
            coin_info_url: config.coin_info_url.clone(),
            market_chart_url: config.market_chart_url.clone(),
            fear_greed_url: config.fear_greed_url.clone(),
            fees_url: config.fees_url.clone(),
        }
    }

    /// Fetch all indicators sequentially and derive the Mayer Multiple.
    pub async fn snapshot(&self) -> Snapshot {
        let price = self.price().await;
        let ath = self.ath().await;
        let ma200 = self.ma_200().await;
        let mayer = mayer_multiple(price, ma200);
        let fear_greed = self.fear_greed().await;
        let fees = self.fees().await;

        Snapshot {
            price,
            ath,
            ma200,
            mayer,
            fear_greed,
            fees,
        }
    }

    /// Current BTC spot price in USD.
    #[instrument(skip(self))]
    pub async fn price(&self) -> Option<f64> {
        match self.fetch_price().await {
            Ok(price) => Some(price),
            Err(e) => {
                warn!(error = %e, "failed to fetch BTC price");
                None
            }
        }
    }

    /// All-time-high price in USD.
    #[instrument(skip(self))]
    pub async fn ath(&self) -> Option<f64> {
        match self.fetch_ath().await {
            Ok(ath) => Some(ath),
            Err(e) => {
                warn!(error = %e, "failed to fetch BTC ATH");
                None
            }
        }
    }

    /// 200-day moving average in USD, floored to an integer value.
    #[instrument(skip(self))]
    pub async fn ma_200(&self) -> Option<f64> {
        match self.fetch_ma_200().await {
            Ok(ma) => Some(ma),
            Err(e) => {
                warn!(error = %e, "failed to fetch price range for the 200-day MA");
                None
            }
        }
    }

    /// Current Fear & Greed reading.
    #[instrument(skip(self))]
    pub async fn fear_greed(&self) -> Option<FearGreed> {
        match self.fetch_fear_greed().await {
            Ok(reading) => Some(reading),
            Err(e) => {
                warn!(error = %e, "failed to fetch fear & greed index");
                None
            }
        }
    }

    /// Recommended transfer fees. Individual fields degrade on their
    /// own; a request-level failure leaves all three absent.
    #[instrument(skip(self))]
    pub async fn fees(&self) -> FeeEstimates {
        match self.fetch_fees().await {
            Ok(fees) => fees,
            Err(e) => {
                warn!(error = %e, "failed to fetch transfer fees");
                FeeEstimates::default()
            }
        }
    }

    async fn fetch_price(&self) -> Result<f64, FetchError> {
        let body = self.get_text(&self.price_url, &[]).await?;
        types::parse_price(&body)
    }

    async fn fetch_ath(&self) -> Result<f64, FetchError> {
        let body = self.get_text(&self.coin_info_url, &[]).await?;
        types::parse_ath(&body)
    }

    async fn fetch_ma_200(&self) -> Result<f64, FetchError> {
        let to = Utc::now().timestamp();
        let from = to - MA_WINDOW_SECS;

        let query = [
            ("vs_currency", "usd".to_string()),
            ("from", from.to_string()),
            ("to", to.to_string()),
        ];

        let body = self.get_text(&self.market_chart_url, &query).await?;
        types::parse_ma_200(&body)
    }

    async fn fetch_fear_greed(&self) -> Result<FearGreed, FetchError> {
        let body = self.get_text(&self.fear_greed_url, &[]).await?;
        types::parse_fear_greed(&body)
    }

    async fn fetch_fees(&self) -> Result<FeeEstimates, FetchError> {
        let body = self.get_text(&self.fees_url, &[]).await?;
        types::parse_fees(&body)
    }

    async fn get_text(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, FetchError> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
