//! sipstat exporter library entry.
//!
//! Wires the statistics source, the processor registry, the scrape driver
//! and the HTTP surface. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod scrape;
pub mod source;
