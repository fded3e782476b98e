//! Exporter config loader (strict parsing).
//!
//! Every field has a compiled-in default, so running without a config file
//! scrapes the built-in targets and serves `0.0.0.0:8080/metrics`.

pub mod schema;

use std::fs;
use std::path::Path;

use tumocc_core::error::{Result, TumOccError};

pub use schema::{ExporterConfig, ExporterSection, UpstreamSection};

/// Config file looked up in the working directory by the binary.
pub const DEFAULT_CONFIG_PATH: &str = "tumocc-exporter.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        TumOccError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| TumOccError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` when it exists, otherwise fall back to the built-in defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_from_file(path)
    } else {
        let cfg = ExporterConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}
