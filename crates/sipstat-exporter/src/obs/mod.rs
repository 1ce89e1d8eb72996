//! Exporter self-observability.
//!
//! Scrape counters, failures and latency are kept as atomics and appended to
//! every `/metrics` response after the proxy's own metrics.

pub mod metrics;
