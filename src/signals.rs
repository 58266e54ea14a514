//! Threshold evaluation of fetched indicators.

use crate::indicators::Snapshot;

/// Mayer Multiple below which a lump buy is favorable.
const MAYER_BUY_THRESHOLD: f64 = 1.0;

/// Fear & Greed value at or below which a lump buy is favorable.
const FEAR_GREED_BUY_THRESHOLD: u8 = 25;

/// Half-hour fee (sat/vB) at or below which an on-chain transfer is favorable.
const FEE_TRANSFER_THRESHOLD: f64 = 15.0;

/// Advisory message block produced from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalReport {
    lines: Vec<String>,
}

impl SignalReport {
    /// Advisory lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of advisory lines. The renderer erases this many plus the
    /// fixed metric block before the next redraw.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Evaluate the fixed thresholds against a snapshot.
///
/// The missing-data warning never suppresses the signal lines, but it
/// does suppress the "no signals" fallback, which only appears when
/// nothing else was appended at all.
pub fn evaluate(snapshot: &Snapshot) -> SignalReport {
    let mut lines = Vec::new();

    let fear_value = snapshot.fear_greed.as_ref().map(|fg| fg.value);

    if let (Some(mayer), Some(fear)) = (snapshot.mayer, fear_value) {
        if mayer < MAYER_BUY_THRESHOLD && fear <= FEAR_GREED_BUY_THRESHOLD {
            lines.push("✅ BUY SIGNAL: Conditions favorable for lump buy!".to_string());
        }
    }

    if let Some(half_hour) = snapshot.fees.half_hour {
        if half_hour <= FEE_TRANSFER_THRESHOLD {
            lines.push(
                "✅ TRANSFER SIGNAL: Conditions favorable for transfer on-chain!".to_string(),
            );
        }
    }

    // The fee mapping is always present as a value; only the five scalar
    // indicators count towards the warning.
    let missing_data = snapshot.price.is_none()
        || snapshot.ath.is_none()
        || snapshot.ma200.is_none()
        || snapshot.mayer.is_none()
        || fear_value.is_none();

    if missing_data {
        lines.push("⚠️ Failed to fetch some data.".to_string());
    }

    if lines.is_empty() {
        lines.push("ℹ️ No specific signals at this time.".to_string());
    }

    SignalReport { lines }
}
