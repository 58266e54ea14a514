//! Indicator snapshot types and derivations.

/// Fear & Greed index reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FearGreed {
    /// Composite sentiment score, 0-100.
    pub value: u8,
    /// Categorical label, e.g. "Extreme Fear".
    pub classification: String,
}

/// Recommended on-chain transfer fees in sat/vB.
///
/// Fields degrade independently: an invalid upstream field leaves only
/// that field absent, never the whole mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeEstimates {
    /// Next-block fee rate.
    pub fastest: Option<f64>,
    /// Half-hour fee rate.
    pub half_hour: Option<f64>,
    /// One-hour fee rate.
    pub hour: Option<f64>,
}

/// One full cycle of fetched and derived indicator values.
///
/// Every field is independently absent-able; nothing here survives past
/// the next fetch cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Spot price in USD.
    pub price: Option<f64>,
    /// All-time-high price in USD.
    pub ath: Option<f64>,
    /// 200-day moving average in USD, floored to an integer value.
    pub ma200: Option<f64>,
    /// Mayer Multiple, rounded to two decimal places.
    pub mayer: Option<f64>,
    /// Fear & Greed reading.
    pub fear_greed: Option<FearGreed>,
    /// Recommended transfer fees.
    pub fees: FeeEstimates,
}

/// Mayer Multiple: spot price over its 200-day moving average, rounded
/// to two decimal places. Absent when either input is absent or the
/// moving average is zero.
pub fn mayer_multiple(price: Option<f64>, ma200: Option<f64>) -> Option<f64> {
    match (price, ma200) {
        (Some(price), Some(ma)) if ma != 0.0 => Some((price / ma * 100.0).round() / 100.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mayer_ratio_rounds_to_two_decimals() {
        assert_eq!(mayer_multiple(Some(100.0), Some(50.0)), Some(2.0));
        assert_eq!(mayer_multiple(Some(100.0), Some(30.0)), Some(3.33));
    }

    #[test]
    fn mayer_absent_on_zero_moving_average() {
        assert_eq!(mayer_multiple(Some(100.0), Some(0.0)), None);
    }

    #[test]
    fn mayer_absent_on_missing_inputs() {
        assert_eq!(mayer_multiple(None, Some(50.0)), None);
        assert_eq!(mayer_multiple(Some(100.0), None), None);
        assert_eq!(mayer_multiple(None, None), None);
    }
}
