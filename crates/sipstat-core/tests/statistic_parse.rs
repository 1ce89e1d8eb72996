//! Statistics dump parsing.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sipstat_core::error::ErrorCode;
use sipstat_core::statistic::{RawStatistic, Snapshot};

#[test]
fn text_dump_both_separators() {
    let dump = "core:rcv_requests:: 10\n\
                core:fwd_requests = 3\n\
                \n\
                shmem:total_size:: 1024\n";
    let snap = Snapshot::from_text(dump);
    assert_eq!(snap.len(), 3);
    assert_eq!(snap.get("core:fwd_requests").unwrap().value, 3.0);
    let shm = snap.get("shmem:total_size").unwrap();
    assert_eq!(shm.subsystem, "shmem");
    assert_eq!(shm.name, "total_size");
    assert_eq!(shm.value, 1024.0);
}

#[test]
fn text_dump_skips_malformed_lines() {
    let dump = "core:rcv_requests:: ten\nno separator here\n:orphan:: 1\ncore:rcv_replies:: 2\n";
    let snap = Snapshot::from_text(dump);
    assert_eq!(snap.len(), 1);
    assert!(snap.get("core:rcv_replies").is_some());
}

#[test]
fn names_may_contain_colons() {
    let snap = Snapshot::from_text("load:load-proc-1:: 0\ndialog:a:b:: 4\n");
    assert_eq!(snap.get("dialog:a:b").unwrap().name, "a:b");
}

#[test]
fn json_dump() {
    let snap = Snapshot::from_json_str(
        r#"{"core:rcv_requests": 10, "shmem:fragments": "7", "core:label": "n/a", "nocolon": 1}"#,
    )
    .unwrap();
    assert_eq!(snap.len(), 2);
    assert_eq!(snap.get("shmem:fragments").unwrap().value, 7.0);
    let subsystems: Vec<&str> = snap.subsystems().into_iter().collect();
    assert_eq!(subsystems, vec!["core", "shmem"]);
}

#[test]
fn json_dump_must_be_object() {
    let err = Snapshot::from_json_str("[1, 2]").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Source);
    assert!(Snapshot::from_json_str("{").is_err());
}

#[test]
fn full_name_round_trip() {
    let s = RawStatistic::new("core", "bad_URIs_rcvd", 1.0);
    assert_eq!(s.full_name(), "core:bad_URIs_rcvd");
    assert_eq!(RawStatistic::from_full_name("core:bad_URIs_rcvd", 1.0).unwrap(), s);
    assert!(RawStatistic::from_full_name("core:", 1.0).is_none());
}
