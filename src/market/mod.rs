//! Upstream indicator fetching.
//!
//! One fetcher per metric, all on [`IndexClient`]. The absence-on-any-
//! failure contract lives in [`client`]; response shapes and their
//! parse functions live in [`types`].

pub mod client;
pub mod types;

pub use client::IndexClient;
