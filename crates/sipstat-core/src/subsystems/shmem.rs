//! Shared memory gauges.

use crate::catalog::StatSpec;

pub const SUBSYSTEM: &str = "shmem";

pub const STATS: &[StatSpec] = &[
    StatSpec::gauge(
        "total_size",
        "total_size",
        "Total size of shared memory available to OpenSIPS processes.",
    ),
    StatSpec::gauge(
        "used_size",
        "used_size",
        "Amount of shared memory requested and used by OpenSIPS processes.",
    ),
    StatSpec::gauge(
        "real_used_size",
        "real_used_size",
        "Amount of shared memory requested by OpenSIPS processes + malloc overhead",
    ),
    StatSpec::gauge(
        "max_used_size",
        "max_used_size",
        "Maximum amount of shared memory ever used by OpenSIPS processes.",
    ),
    StatSpec::gauge(
        "free_size",
        "free_size",
        "Free memory available. Computed as total_size - real_used_size",
    ),
    StatSpec::gauge("fragments", "fragments", "Total number of fragments in the shared memory."),
];
