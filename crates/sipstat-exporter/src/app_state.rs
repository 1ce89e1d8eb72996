//! Shared application state for the exporter.
//!
//! Built once at startup: the processor registry is populated here and is
//! read-only afterwards. Registry conflicts abort startup.

use std::sync::Arc;

use sipstat_core::error::Result;
use sipstat_core::registry::Registry;

use crate::config::ExporterConfig;
use crate::obs::metrics::ExporterMetrics;
use crate::source::{FileSource, StatisticsSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<Registry>,
    source: Arc<dyn StatisticsSource>,
    metrics: Arc<ExporterMetrics>,
}

struct AppStateInner {
    cfg: ExporterConfig,
}

impl AppState {
    /// Build application state reading statistics from the configured file.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let source = Arc::new(FileSource::from_config(&cfg.source));
        Self::with_source(cfg, source)
    }

    /// Build application state around an explicit statistics source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn StatisticsSource>) -> Result<Self> {
        let registry = Registry::with_defaults(&cfg.exporter.namespace)?;
        tracing::info!(
            namespace = %cfg.exporter.namespace,
            subsystems = ?registry.subsystems(),
            source = source.name(),
            "registry ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            registry: Arc::new(registry),
            source,
            metrics: Arc::new(ExporterMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn source(&self) -> &dyn StatisticsSource {
        self.source.as_ref()
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.metrics
    }
}
