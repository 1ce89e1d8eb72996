#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sipstat_exporter::config::{self, SourceFormat};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "0.0.0.0:9434"
  namepsace: "opensips" # typo should fail
source:
  path: "/var/run/opensips/stats"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
source:
  path: "/var/run/opensips/stats"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:9434");
    assert_eq!(cfg.exporter.metrics_path, "/metrics");
    assert_eq!(cfg.exporter.namespace, "opensips");
    assert_eq!(cfg.source.format, SourceFormat::Text);
}

#[test]
fn json_source_format() {
    let ok = r#"
version: 1
exporter:
  namespace: "sip"
source:
  path: "stats.json"
  format: json
"#;
    let cfg = config::load_from_str(ok).unwrap();
    assert_eq!(cfg.source.format, SourceFormat::Json);
    assert_eq!(cfg.exporter.namespace, "sip");
}

#[test]
fn unsupported_version() {
    let bad = "version: 2\nsource:\n  path: x\n";
    let err = config::load_from_str(bad).unwrap_err();
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn validation_failures() {
    for bad in [
        "version: 1\nsource:\n  path: \"\"\n",
        "version: 1\nexporter:\n  namespace: \"open-sips\"\nsource:\n  path: x\n",
        "version: 1\nexporter:\n  metrics_path: \"metrics\"\nsource:\n  path: x\n",
        "version: 1\nexporter:\n  listen: \"localhost\"\nsource:\n  path: x\n",
        "version: 1\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "{bad}");
    }
}
