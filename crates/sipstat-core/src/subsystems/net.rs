//! Network buffers: bytes waiting to be consumed, per transport.

use crate::catalog::StatSpec;

pub const SUBSYSTEM: &str = "net";

const WAITING_HELP: &str =
    "Number of bytes waiting to be consumed on the OpenSIPS listening interfaces.";

pub const STATS: &[StatSpec] = &[
    StatSpec::gauge("waiting_udp", "waiting_bytes", WAITING_HELP).labeled(&[("protocol", "udp")]),
    StatSpec::gauge("waiting_tcp", "waiting_bytes", WAITING_HELP).labeled(&[("protocol", "tcp")]),
    StatSpec::gauge("waiting_tls", "waiting_bytes", WAITING_HELP).labeled(&[("protocol", "tls")]),
];
