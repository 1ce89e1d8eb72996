//! End-to-end scrape through the collection driver.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;

use sipstat_core::error::{Result, SipStatError};
use sipstat_core::statistic::Snapshot;
use sipstat_exporter::app_state::AppState;
use sipstat_exporter::config::{self, SourceFormat};
use sipstat_exporter::source::{FileSource, StatisticsSource};
use sipstat_exporter::{ops, scrape};

struct FixedSource {
    dump: &'static str,
    failing: AtomicBool,
}

#[async_trait]
impl StatisticsSource for FixedSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch(&self) -> Result<Snapshot> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(SipStatError::Source("proxy unreachable".into()));
        }
        Ok(Snapshot::from_text(self.dump))
    }
}

fn state(dump: &'static str) -> (AppState, Arc<FixedSource>) {
    let cfg = config::load_from_str("version: 1\nsource:\n  path: unused\n").unwrap();
    let source = Arc::new(FixedSource {
        dump,
        failing: AtomicBool::new(false),
    });
    let state = AppState::with_source(cfg, source.clone()).unwrap();
    (state, source)
}

#[tokio::test]
async fn scrape_renders_proxy_and_self_metrics() {
    let (state, _) = state("core:rcv_requests:: 10\ncore:fwd_requests:: 3\nshmem:total_size:: 1024\ncore:unknown_stat:: 5\n");
    let body = scrape::scrape(&state).await;

    assert!(body.contains("opensips_core_requests_total 10\n"));
    assert!(body.contains("opensips_core_requests{kind=\"forwarded\"} 3\n"));
    assert!(body.contains("# TYPE opensips_shmem_total_size gauge\nopensips_shmem_total_size 1024\n"));
    assert!(!body.contains("unknown_stat"));
    assert!(body.contains("opensips_up 1\n"));
    assert!(body.contains("opensips_exporter_scrapes_total 1\n"));
    assert_eq!(state.metrics().scrape_duration.count(&[]), 1);
}

#[tokio::test]
async fn failed_fetch_reports_down() {
    let (state, source) = state("core:rcv_requests:: 10\n");
    scrape::scrape(&state).await;

    source.failing.store(true, Ordering::Relaxed);
    let body = scrape::scrape(&state).await;

    assert!(!body.contains("opensips_core_requests_total"));
    assert!(body.contains("opensips_up 0\n"));
    assert!(body.contains("opensips_exporter_scrape_errors_total{reason=\"source\"} 1\n"));
    assert_eq!(state.metrics().scrapes.get(&[]), 2);
}

#[tokio::test]
async fn metrics_handler_sets_content_type() {
    let (state, _) = state("shmem:fragments:: 12\n");
    let resp = ops::metrics(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
        "text/plain; version=0.0.4; charset=utf-8"
    );

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("opensips_shmem_fragments 12\n"));
}

#[tokio::test]
async fn file_source_reads_both_formats() {
    let dir = std::env::temp_dir().join(format!("sipstat-source-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();

    let text = dir.join("stats.txt");
    tokio::fs::write(&text, "net:waiting_udp:: 42\n").await.unwrap();
    let snap = FileSource::new(&text, SourceFormat::Text).fetch().await.unwrap();
    assert_eq!(snap.get("net:waiting_udp").unwrap().value, 42.0);

    let json = dir.join("stats.json");
    tokio::fs::write(&json, r#"{"core:timestamp": 3600}"#).await.unwrap();
    let snap = FileSource::new(&json, SourceFormat::Json).fetch().await.unwrap();
    assert_eq!(snap.get("core:timestamp").unwrap().value, 3600.0);

    let missing = FileSource::new(dir.join("absent"), SourceFormat::Text).fetch().await;
    assert_eq!(missing.unwrap_err().code().as_str(), "SOURCE");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
