//! BTC market-indicator terminal dashboard.
//!
//! Polls five public HTTP APIs for Bitcoin market indicators (spot
//! price, all-time high, 200-day moving average, Fear & Greed index and
//! recommended on-chain transfer fees), derives the Mayer Multiple and
//! simple buy/transfer signals from fixed thresholds, and redraws a
//! fixed-layout terminal view every refresh cycle.
//!
//! Every indicator is independently absent-able: any fetch failure is
//! normalized to an absent value at the fetcher boundary and the rest
//! of the dashboard keeps working with what it has.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`logging`]: Per-run diagnostic log file
//! - [`market`]: Upstream indicator fetching
//! - [`indicators`]: Snapshot types and the Mayer Multiple derivation
//! - [`signals`]: Threshold evaluation
//! - [`render`]: Terminal rendering

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod market;
pub mod render;
pub mod signals;

pub use config::Config;
pub use error::{DashError, FetchError, Result};
