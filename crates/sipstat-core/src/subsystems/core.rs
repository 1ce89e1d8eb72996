//! Core proxy counters: message totals, forwarding outcomes, parse failures.

use crate::catalog::StatSpec;

pub const SUBSYSTEM: &str = "core";

const REQUESTS_HELP: &str = "Number of requests by OpenSIPS.";
const REPLIES_HELP: &str = "Number of received replies by OpenSIPS.";

pub const STATS: &[StatSpec] = &[
    StatSpec::counter(
        "rcv_requests",
        "requests_total",
        "Total number of received requests by OpenSIPS.",
    ),
    StatSpec::counter(
        "rcv_replies",
        "replies_total",
        "Total number of received replies by OpenSIPS.",
    ),
    StatSpec::counter("fwd_requests", "requests", REQUESTS_HELP).labeled(&[("kind", "forwarded")]),
    StatSpec::counter("drop_requests", "requests", REQUESTS_HELP).labeled(&[("kind", "dropped")]),
    StatSpec::counter("err_requests", "requests", REQUESTS_HELP).labeled(&[("kind", "error")]),
    StatSpec::counter("fwd_replies", "replies", REPLIES_HELP).labeled(&[("kind", "forwarded")]),
    StatSpec::counter("drop_replies", "replies", REPLIES_HELP).labeled(&[("kind", "dropped")]),
    StatSpec::counter("err_replies", "replies", REPLIES_HELP).labeled(&[("kind", "error")]),
    StatSpec::counter(
        "bad_URIs_rcvd",
        "bad_URIs_rcvd",
        "Number of URIs that OpenSIPS failed to parse.",
    ),
    StatSpec::counter(
        "unsupported_methods",
        "unsupported_methods",
        "Number of non-standard methods encountered by OpenSIPS while parsing SIP methods.",
    ),
    StatSpec::counter(
        "bad_msg_hdr",
        "bad_msg_hdr",
        "Number of SIP headers that OpenSIPS failed to parse.",
    ),
    StatSpec::counter(
        "timestamp",
        "uptime_seconds",
        "Number of seconds elapsed from OpenSIPS starting.",
    ),
];
