//! End-to-end render cycle against fixed snapshot values.
//!
//! Exercises the evaluate → draw → erase path with a deterministic
//! snapshot, asserting the exact rendered lines and the coupling
//! between the advisory line count and the erase arithmetic.

use btc_dash::indicators::{FearGreed, FeeEstimates, Snapshot};
use btc_dash::render::Dashboard;
use btc_dash::signals;

/// crossterm clear-current-line sequence.
const CLEAR_LINE: &str = "\u{1b}[2K";

/// Fixed metric lines printed above the advisory block (six metrics
/// plus the blank separator).
const FIXED_BLOCK_LINES: usize = 7;

fn fixed_snapshot() -> Snapshot {
    Snapshot {
        price: Some(95_000.0),
        ath: Some(109_000.0),
        ma200: Some(80_000.0),
        mayer: Some(1.19),
        fear_greed: Some(FearGreed {
            value: 50,
            classification: "Neutral".to_string(),
        }),
        fees: FeeEstimates {
            fastest: Some(40.0),
            half_hour: Some(10.0),
            hour: Some(5.0),
        },
    }
}

#[test]
fn full_cycle_renders_deterministic_lines() {
    let snapshot = fixed_snapshot();
    let report = signals::evaluate(&snapshot);

    // The half-hour fee of 10 sat/vB is under the transfer threshold.
    assert_eq!(
        report.lines(),
        ["✅ TRANSFER SIGNAL: Conditions favorable for transfer on-chain!"]
    );

    let mut buf = Vec::new();
    {
        let mut dashboard = Dashboard::new(&mut buf);
        dashboard.status_fetching().unwrap();
        dashboard.draw(&snapshot, &report).unwrap();
    }
    let rendered = String::from_utf8(buf).unwrap();

    assert!(rendered.contains("Fetching data..."));
    assert!(rendered.contains("🔸 BTC Price:       $95000"));
    assert!(rendered.contains("🔸 BTC ATH:         $109000"));
    assert!(rendered.contains("🔸 200-day MA:      $80000"));
    assert!(rendered.contains("🔸 Mayer Multiple:  1.19"));
    assert!(rendered.contains("🔸 Fear & Greed:    50 (Neutral)"));
    assert!(rendered.contains("🔸 Fees (sat/vB):   [Fast] 40, [Normal] 10, [Cheap] 5"));
    assert!(rendered.contains("TRANSFER SIGNAL"));
}

#[test]
fn erase_count_equals_advisory_lines_plus_fixed_block() {
    let report = signals::evaluate(&fixed_snapshot());

    let mut buf = Vec::new();
    {
        let mut dashboard = Dashboard::new(&mut buf);
        dashboard.erase_block(report.line_count()).unwrap();
    }
    let rendered = String::from_utf8(buf).unwrap();

    assert_eq!(
        rendered.matches(CLEAR_LINE).count(),
        report.line_count() + FIXED_BLOCK_LINES
    );
}

#[test]
fn degraded_cycle_shows_placeholders_and_warning() {
    let mut snapshot = fixed_snapshot();
    snapshot.price = None;
    snapshot.mayer = None;
    snapshot.fees.half_hour = None;

    let report = signals::evaluate(&snapshot);
    assert_eq!(report.lines(), ["⚠️ Failed to fetch some data."]);

    let mut buf = Vec::new();
    {
        let mut dashboard = Dashboard::new(&mut buf);
        dashboard.status_fetching().unwrap();
        dashboard.draw(&snapshot, &report).unwrap();
        dashboard.erase_block(report.line_count()).unwrap();
    }
    let rendered = String::from_utf8(buf).unwrap();

    assert!(rendered.contains("🔸 BTC Price:       $--"));
    assert!(rendered.contains("[Fast] 40, [Normal] --, [Cheap] 5"));
    assert!(rendered.contains("⚠️ Failed to fetch some data."));

    // 1 status-line erase during draw, then the full block erase.
    assert_eq!(
        rendered.matches(CLEAR_LINE).count(),
        1 + report.line_count() + FIXED_BLOCK_LINES
    );
}
