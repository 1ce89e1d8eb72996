//! sipstat core: the statistic-to-metric mapping shared by the exporter and
//! its tests.
//!
//! A SIP proxy reports a flat namespace of `subsystem:name` counters and
//! gauges. This crate turns one snapshot of those values into typed, labeled
//! metric samples:
//! - `catalog`: per-subsystem tables mapping statistic names to descriptors.
//! - `processor`: the two-phase collector (describe, then collect) bound to
//!   one snapshot.
//! - `registry`: dispatch keys (statistic names and `"<subsystem>:"`
//!   sentinels) to processor factories.
//!
//! # Defensive guarantees
//! `unwrap`, `expect` and `panic!` are compile-denied here. Catalog and
//! registry inconsistencies surface as `SipStatError` during startup so the
//! scrape path never has to fail.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod exposition;
pub mod processor;
pub mod registry;
pub mod statistic;
pub mod subsystems;

/// Shared result type.
pub use error::{Result, SipStatError};
