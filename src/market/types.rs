//! Response types and parse functions for the upstream indicator APIs.
//!
//! Each `parse_*` function validates the full expected shape and maps
//! any mismatch to a [`FetchError`]; transport and HTTP-status failures
//! are handled by the client before these run.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::FetchError;
use crate::indicators::{FearGreed, FeeEstimates};

/// Body of the simple-price endpoint: `{"bitcoin": {"usd": <num>}}`.
#[derive(Debug, Deserialize)]
pub struct SimplePriceResponse {
    /// Per-coin quote map, reduced to the one coin we ask for.
    pub bitcoin: UsdQuote,
}

/// Single USD quote.
#[derive(Debug, Deserialize)]
pub struct UsdQuote {
    /// Value in USD.
    pub usd: f64,
}

/// Body of the coin-info endpoint, reduced to the ATH we care about.
#[derive(Debug, Deserialize)]
pub struct CoinInfoResponse {
    /// Market statistics block.
    pub market_data: MarketStats,
}

/// Market statistics inside the coin-info document.
#[derive(Debug, Deserialize)]
pub struct MarketStats {
    /// All-time-high quotes per currency.
    pub ath: UsdQuote,
}

/// Body of the market-chart range endpoint: `[timestamp, price]` pairs.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    /// Daily close samples over the requested window.
    pub prices: Vec<(f64, f64)>,
}

/// Body of the Fear & Greed endpoint.
#[derive(Debug, Deserialize)]
pub struct FearGreedResponse {
    /// Readings, most recent first.
    pub data: Vec<FearGreedEntry>,
}

/// One Fear & Greed reading; `value` arrives as a string.
#[derive(Debug, Deserialize)]
pub struct FearGreedEntry {
    /// Sentiment score as a decimal string.
    pub value: String,
    /// Categorical label for the score.
    pub value_classification: String,
}

pub(crate) fn parse_price(body: &str) -> Result<f64, FetchError> {
    let parsed: SimplePriceResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Shape(e.to_string()))?;

    Ok(parsed.bitcoin.usd)
}

pub(crate) fn parse_ath(body: &str) -> Result<f64, FetchError> {
    let parsed: CoinInfoResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Shape(e.to_string()))?;

    Ok(parsed.market_data.ath.usd)
}

/// Mean of the price components over the returned window, floored to an
/// integer value. An empty series fails the whole computation.
pub(crate) fn parse_ma_200(body: &str) -> Result<f64, FetchError> {
    let parsed: MarketChartResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Shape(e.to_string()))?;

    if parsed.prices.is_empty() {
        return Err(FetchError::Shape("'prices' series is empty".to_string()));
    }

    let sum: f64 = parsed.prices.iter().map(|(_, price)| price).sum();

    Ok((sum / parsed.prices.len() as f64).floor())
}

pub(crate) fn parse_fear_greed(body: &str) -> Result<FearGreed, FetchError> {
    let parsed: FearGreedResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Shape(e.to_string()))?;

    let entry = parsed
        .data
        .first()
        .ok_or_else(|| FetchError::Shape("'data' list is empty".to_string()))?;

    let value = entry.value.parse::<u8>().map_err(|_| {
        FetchError::Coercion(format!(
            "fear & greed value '{}' is not an integer",
            entry.value
        ))
    })?;

    Ok(FearGreed {
        value,
        classification: entry.value_classification.clone(),
    })
}

/// Unlike the other parsers, fee fields are validated independently: a
/// single missing or wrong-typed field degrades only itself.
pub(crate) fn parse_fees(body: &str) -> Result<FeeEstimates, FetchError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Shape(e.to_string()))?;

    let map = parsed
        .as_object()
        .ok_or_else(|| FetchError::Shape("response is not a JSON object".to_string()))?;

    let field = |key: &str| -> Option<f64> {
        match map.get(key).and_then(Value::as_f64) {
            Some(value) => Some(value),
            None => {
                warn!(field = key, "missing or invalid fee field");
                None
            }
        }
    };

    Ok(FeeEstimates {
        fastest: field("fastestFee"),
        half_hour: field("halfHourFee"),
        hour: field("hourFee"),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_price_extracts_usd_value() {
        let body = r#"{"bitcoin": {"usd": 64250.5}}"#;
        assert_eq!(parse_price(body).unwrap(), 64250.5);
    }

    #[test]
    fn parse_price_rejects_wrong_type() {
        let body = r#"{"bitcoin": {"usd": "high"}}"#;
        assert!(matches!(parse_price(body), Err(FetchError::Shape(_))));
    }

    #[test]
    fn parse_price_rejects_missing_coin() {
        assert!(parse_price("{}").is_err());
    }

    #[test]
    fn parse_price_rejects_non_object_body() {
        assert!(parse_price("[1, 2, 3]").is_err());
    }

    #[test]
    fn parse_ath_extracts_nested_value() {
        let body = r#"{"market_data": {"ath": {"usd": 109000.0}, "other": 1}, "name": "Bitcoin"}"#;
        assert_eq!(parse_ath(body).unwrap(), 109000.0);
    }

    #[test]
    fn parse_ath_rejects_missing_market_data() {
        let body = r#"{"name": "Bitcoin"}"#;
        assert!(parse_ath(body).is_err());
    }

    #[test]
    fn parse_ma_200_means_and_floors() {
        let body = r#"{"prices": [[1000, 10.0], [2000, 11.0], [3000, 12.5]]}"#;
        assert_eq!(parse_ma_200(body).unwrap(), 11.0);
    }

    #[test]
    fn parse_ma_200_rejects_empty_series() {
        let body = r#"{"prices": []}"#;
        assert!(matches!(parse_ma_200(body), Err(FetchError::Shape(_))));
    }

    #[test]
    fn parse_ma_200_rejects_malformed_pair() {
        let body = r#"{"prices": [[1000]]}"#;
        assert!(parse_ma_200(body).is_err());
    }

    #[test]
    fn parse_fear_greed_coerces_string_value() {
        let body = r#"{"data": [{"value": "34", "value_classification": "Fear"}]}"#;
        let fg = parse_fear_greed(body).unwrap();
        assert_eq!(fg.value, 34);
        assert_eq!(fg.classification, "Fear");
    }

    #[test]
    fn parse_fear_greed_rejects_non_numeric_value() {
        let body = r#"{"data": [{"value": "scared", "value_classification": "Fear"}]}"#;
        assert!(matches!(
            parse_fear_greed(body),
            Err(FetchError::Coercion(_))
        ));
    }

    #[test]
    fn parse_fear_greed_rejects_empty_list() {
        let body = r#"{"data": []}"#;
        assert!(matches!(parse_fear_greed(body), Err(FetchError::Shape(_))));
    }

    #[test]
    fn parse_fees_extracts_all_fields() {
        let body = r#"{"fastestFee": 40, "halfHourFee": 20, "hourFee": 10}"#;
        let fees = parse_fees(body).unwrap();
        assert_eq!(fees.fastest, Some(40.0));
        assert_eq!(fees.half_hour, Some(20.0));
        assert_eq!(fees.hour, Some(10.0));
    }

    #[test]
    fn parse_fees_degrades_missing_field_only() {
        let body = r#"{"fastestFee": 40, "halfHourFee": 20}"#;
        let fees = parse_fees(body).unwrap();
        assert_eq!(fees.fastest, Some(40.0));
        assert_eq!(fees.half_hour, Some(20.0));
        assert_eq!(fees.hour, None);
    }

    #[test]
    fn parse_fees_degrades_wrong_typed_field_only() {
        let body = r#"{"fastestFee": 40, "halfHourFee": "slow", "hourFee": 10}"#;
        let fees = parse_fees(body).unwrap();
        assert_eq!(fees.fastest, Some(40.0));
        assert_eq!(fees.half_hour, None);
        assert_eq!(fees.hour, Some(10.0));
    }

    #[test]
    fn parse_fees_rejects_non_object_body() {
        assert!(matches!(parse_fees("[]"), Err(FetchError::Shape(_))));
    }
}
