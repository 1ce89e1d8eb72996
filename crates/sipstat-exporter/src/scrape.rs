//! Collection driver: one call per `/metrics` request.
//!
//! fetch snapshot -> resolve processors -> render samples -> append
//! self-metrics. A failed fetch still yields a response (with `up 0`).

use std::time::Instant;

use sipstat_core::exposition;

use crate::app_state::AppState;

pub async fn scrape(state: &AppState) -> String {
    let started = Instant::now();
    let metrics = state.metrics();
    let mut out = String::new();

    match state.source().fetch().await {
        Ok(snapshot) => {
            let processors = state.registry().resolve(&snapshot);
            exposition::render(&processors, &mut out);
            metrics.set_up(true);
            tracing::debug!(
                statistics = snapshot.len(),
                processors = processors.len(),
                "scrape complete"
            );
        }
        Err(e) => {
            let reason = e.code().as_str().to_ascii_lowercase();
            tracing::warn!(source = state.source().name(), error = %e, "statistics fetch failed");
            metrics.scrape_errors.inc(&[("reason", reason.as_str())]);
            metrics.set_up(false);
        }
    }

    metrics.scrapes.inc(&[]);
    metrics.scrape_duration.observe(&[], started.elapsed());
    metrics.render(&state.cfg().exporter.namespace, &mut out);
    out
}
