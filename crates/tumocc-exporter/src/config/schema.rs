use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use tumocc_core::error::{Result, TumOccError};
use tumocc_core::protocol::{DEFAULT_FORM_FIELD, DEFAULT_UPSTREAM_URL};
use tumocc_core::target::{builtin_targets, validate_targets};
use tumocc_core::Target;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub upstream: UpstreamSection,

    #[serde(default = "builtin_targets")]
    pub targets: Vec<Target>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            upstream: UpstreamSection::default(),
            targets: builtin_targets(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TumOccError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.exporter.validate()?;
        self.upstream.validate()?;
        validate_targets(&self.targets)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    #[serde(default = "default_scrape_interval_secs")]
    pub scrape_interval_secs: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
            scrape_interval_secs: default_scrape_interval_secs(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.metrics_path.starts_with('/') {
            return Err(TumOccError::Config(
                "exporter.metrics_path must start with '/'".into(),
            ));
        }
        if self.metrics_path == "/healthz" {
            return Err(TumOccError::Config(
                "exporter.metrics_path must not shadow /healthz".into(),
            ));
        }
        if !(1..=86_400).contains(&self.scrape_interval_secs) {
            return Err(TumOccError::Config(
                "exporter.scrape_interval_secs must be between 1 and 86400".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TumOccError::Config(format!("exporter.listen must be a valid SocketAddr: {e}"))
        })
    }

    pub fn scrape_interval(&self) -> Duration {
        Duration::from_secs(self.scrape_interval_secs)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_form_field")]
    pub form_field: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            form_field: default_form_field(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(TumOccError::Config("upstream.url must not be empty".into()));
        }
        if self.form_field.is_empty() {
            return Err(TumOccError::Config(
                "upstream.form_field must not be empty".into(),
            ));
        }
        if !(1..=300_000).contains(&self.timeout_ms) {
            return Err(TumOccError::Config(
                "upstream.timeout_ms must be between 1 and 300000".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
fn default_scrape_interval_secs() -> u64 {
    60
}
fn default_url() -> String {
    DEFAULT_UPSTREAM_URL.into()
}
fn default_form_field() -> String {
    DEFAULT_FORM_FIELD.into()
}
fn default_timeout_ms() -> u64 {
    10_000
}
