//! Statistics sources: where a scrape's snapshot comes from.
//!
//! Talking to the proxy's management interface is left to the deployment;
//! the exporter reads whatever dump the proxy (or a sidecar) last wrote.

use std::path::PathBuf;

use async_trait::async_trait;

use sipstat_core::error::{Result, SipStatError};
use sipstat_core::statistic::Snapshot;

use crate::config::{SourceConfig, SourceFormat};

/// Delivers one fresh snapshot per scrape.
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self) -> Result<Snapshot>;
}

/// Re-reads a statistics dump file on every scrape.
pub struct FileSource {
    path: PathBuf,
    format: SourceFormat,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn from_config(cfg: &SourceConfig) -> Self {
        Self::new(&cfg.path, cfg.format)
    }
}

#[async_trait]
impl StatisticsSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self) -> Result<Snapshot> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SipStatError::Source(format!("read {} failed: {e}", self.path.display()))
        })?;
        match self.format {
            SourceFormat::Text => Ok(Snapshot::from_text(&body)),
            SourceFormat::Json => Snapshot::from_json_str(&body),
        }
    }
}
