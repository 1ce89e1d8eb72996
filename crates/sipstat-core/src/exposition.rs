//! Prometheus text exposition (version 0.0.4).
//!
//! Descriptors are written in `describe` order; samples are grouped under
//! their descriptor and sorted by label values so output is deterministic.
//! Descriptors without samples in this scrape are omitted from the text.

use std::fmt::Write;

use crate::descriptor::Sample;
use crate::processor::Collector;

/// Content type of the rendered body.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape label values.
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Float formatting accepted by Prometheus parsers.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v.is_infinite() {
        if v > 0.0 {
            "+Inf".into()
        } else {
            "-Inf".into()
        }
    } else {
        v.to_string()
    }
}

/// Render every collector into `out`.
pub fn render<C: Collector>(collectors: &[C], out: &mut String) {
    for c in collectors {
        render_collector(c, out);
    }
}

/// Render one collector into `out`.
pub fn render_collector(collector: &dyn Collector, out: &mut String) {
    let mut samples: Vec<Sample<'_>> = collector.collect().collect();
    samples.sort_by(|a, b| a.label_values().cmp(b.label_values()));

    for desc in collector.describe() {
        let mut group = samples
            .iter()
            .filter(|s| std::ptr::eq(s.desc(), desc))
            .peekable();
        if group.peek().is_none() {
            continue;
        }

        let name = desc.fq_name();
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(desc.help()));
        let _ = writeln!(out, "# TYPE {} {}", name, desc.kind());
        for s in group {
            let label_str = s
                .labels()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            if label_str.is_empty() {
                let _ = writeln!(out, "{} {}", name, format_value(s.value()));
            } else {
                let _ = writeln!(out, "{}{{{}}} {}", name, label_str, format_value(s.value()));
            }
        }
    }
}
