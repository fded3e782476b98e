//! Shared application state for the exporter.
//!
//! Built once at startup. The metric store is shared between the scrape
//! scheduler (writer) and the HTTP handlers (readers); the target registry is
//! frozen into an `Arc<[Target]>`.

use std::sync::Arc;

use tumocc_core::error::Result;
use tumocc_core::Target;

use crate::config::ExporterConfig;
use crate::obs::ExporterMetrics;
use crate::scheduler::Scheduler;
use crate::upstream::{HttpFetcher, OccupancySource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ExporterMetrics>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    targets: Arc<[Target]>,
}

impl AppState {
    /// Build application state from a validated config.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        cfg.validate()?;
        let targets: Arc<[Target]> = cfg.targets.clone().into();
        tracing::debug!(targets = targets.len(), "target registry loaded");

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, targets }),
            metrics: Arc::new(ExporterMetrics::new()),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn targets(&self) -> Arc<[Target]> {
        Arc::clone(&self.inner.targets)
    }

    pub fn metrics(&self) -> Arc<ExporterMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Scheduler wired to the configured HTTP upstream.
    pub fn http_scheduler(&self) -> Result<Scheduler> {
        let fetcher = HttpFetcher::from_config(&self.cfg().upstream)?;
        Ok(self.scheduler(Arc::new(fetcher)))
    }

    /// Scheduler over an arbitrary source, sharing this state's store.
    pub fn scheduler(&self, source: Arc<dyn OccupancySource>) -> Scheduler {
        Scheduler::new(
            source,
            self.targets(),
            self.metrics(),
            self.cfg().exporter.scrape_interval(),
        )
    }
}
