//! Top-level facade crate for sipstat.
//!
//! Re-exports the mapping core and the exporter library so users can depend on a single crate.

pub mod core {
    pub use sipstat_core::*;
}

pub mod exporter {
    pub use sipstat_exporter::*;
}
