use std::net::SocketAddr;

use serde::Deserialize;
use sipstat_core::error::{Result, SipStatError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    pub source: SourceConfig,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SipStatError::UnsupportedVersion);
        }

        self.exporter.validate()?;
        self.source.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    /// Prefix of every exported metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
            namespace: default_namespace(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(SipStatError::BadConfig(format!(
                "exporter.listen must be a socket address, got {:?}",
                self.listen
            )));
        }
        if !self.metrics_path.starts_with('/') || self.metrics_path == "/healthz" {
            return Err(SipStatError::BadConfig(
                "exporter.metrics_path must start with '/' and must not be /healthz".into(),
            ));
        }
        if !is_namespace(&self.namespace) {
            return Err(SipStatError::BadConfig(format!(
                "exporter.namespace must match [a-zA-Z_][a-zA-Z0-9_]*, got {:?}",
                self.namespace
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| SipStatError::BadConfig(format!("exporter.listen: {e}")))
    }
}

fn is_namespace(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_listen() -> String {
    "0.0.0.0:9434".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
fn default_namespace() -> String {
    "opensips".into()
}

/// Where the statistics dump is read from on every scrape.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: String,
    #[serde(default)]
    pub format: SourceFormat,
}

impl SourceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(SipStatError::BadConfig("source.path must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// `subsystem:name:: value` lines.
    #[default]
    Text,
    /// Flat `{"subsystem:name": value}` object.
    Json,
}
