//! Text exposition output.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sipstat_core::catalog::{Catalog, StatSpec};
use sipstat_core::exposition::{format_value, render};
use sipstat_core::registry::Registry;
use sipstat_core::statistic::Snapshot;

#[test]
fn renders_grouped_family() {
    let registry = Registry::with_defaults("opensips").unwrap();
    let snap = Snapshot::from_text(
        "core:err_requests:: 1\ncore:fwd_requests:: 3\ncore:drop_requests:: 2\ncore:rcv_requests:: 10\n",
    );
    let mut out = String::new();
    render(&registry.resolve(&snap), &mut out);

    let expected = "\
# HELP opensips_core_requests_total Total number of received requests by OpenSIPS.
# TYPE opensips_core_requests_total counter
opensips_core_requests_total 10
# HELP opensips_core_requests Number of requests by OpenSIPS.
# TYPE opensips_core_requests counter
opensips_core_requests{kind=\"dropped\"} 2
opensips_core_requests{kind=\"error\"} 1
opensips_core_requests{kind=\"forwarded\"} 3
";
    assert_eq!(out, expected);
}

#[test]
fn absent_descriptors_are_not_rendered() {
    let registry = Registry::with_defaults("opensips").unwrap();
    let snap = Snapshot::from_text("shmem:free_size:: 2048.5\n");
    let mut out = String::new();
    render(&registry.resolve(&snap), &mut out);
    assert_eq!(
        out,
        "# HELP opensips_shmem_free_size Free memory available. Computed as total_size - real_used_size\n\
         # TYPE opensips_shmem_free_size gauge\n\
         opensips_shmem_free_size 2048.5\n"
    );
}

#[test]
fn escapes_label_values() {
    const SPECS: &[StatSpec] =
        &[StatSpec::gauge("q", "q", "Line\nbreak.").labeled(&[("v", "a\"b\\c")])];
    let mut registry = Registry::new();
    registry.install(Catalog::new("ns", "x", SPECS).unwrap()).unwrap();
    let snap = Snapshot::from_text("x:q:: 1\n");
    let mut out = String::new();
    render(&registry.resolve(&snap), &mut out);
    assert!(out.contains("# HELP ns_x_q Line\\nbreak."));
    assert!(out.contains("ns_x_q{v=\"a\\\"b\\\\c\"} 1"));
}

#[test]
fn special_float_values() {
    assert_eq!(format_value(f64::NAN), "NaN");
    assert_eq!(format_value(f64::INFINITY), "+Inf");
    assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
    assert_eq!(format_value(3.0), "3");
    assert_eq!(format_value(0.25), "0.25");
}
