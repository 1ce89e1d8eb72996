//! Sample construction against descriptors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sipstat_core::descriptor::{MetricDescriptor, Sample, ValueKind};

fn requests() -> MetricDescriptor {
    MetricDescriptor::new(
        "opensips",
        "core",
        "requests",
        "Number of requests by OpenSIPS.",
        vec!["kind".to_string()],
        ValueKind::Counter,
    )
}

#[test]
fn sample_pairs_labels_in_order() {
    let desc = requests();
    let values = vec!["dropped".to_string()];
    let sample = Sample::new(&desc, 2.0, &values);
    assert_eq!(sample.value(), 2.0);
    assert_eq!(sample.labels().collect::<Vec<_>>(), vec![("kind", "dropped")]);
}

#[test]
#[should_panic(expected = "label cardinality mismatch")]
fn missing_label_value_fails_fast() {
    let desc = requests();
    let _ = Sample::new(&desc, 1.0, &[]);
}

#[test]
#[should_panic(expected = "label cardinality mismatch")]
fn extra_label_value_fails_fast() {
    let desc = MetricDescriptor::new("opensips", "shmem", "fragments", "F.", vec![], ValueKind::Gauge);
    let values = vec!["surplus".to_string()];
    let _ = Sample::new(&desc, 1.0, &values);
}
