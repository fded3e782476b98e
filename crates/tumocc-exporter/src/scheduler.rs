//! Scrape cycle scheduler.
//!
//! Loop: scrape every target once, in registry order, then sleep for the
//! interval. The first pass starts immediately. Targets are fetched one at a
//! time; a failing target is logged and skipped, and its last published
//! value stays in the store. The task has no stop condition and is never
//! joined: it lives as long as the process.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use tumocc_core::Target;

use crate::obs::ExporterMetrics;
use crate::upstream::OccupancySource;

/// Outcome of one pass over the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub updated: usize,
    pub failed: usize,
}

pub struct Scheduler {
    source: Arc<dyn OccupancySource>,
    targets: Arc<[Target]>,
    metrics: Arc<ExporterMetrics>,
    interval: Duration,
}

impl Scheduler {
    pub fn new(
        source: Arc<dyn OccupancySource>,
        targets: Arc<[Target]>,
        metrics: Arc<ExporterMetrics>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            targets,
            metrics,
            interval,
        }
    }

    /// One full pass. Only successful fetches touch the store.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut report = CycleReport::default();

        for target in self.targets.iter() {
            match self.source.fetch(target).await {
                Ok(reading) => {
                    info!("{}: {:.0}%", reading.label, reading.usage);
                    self.metrics.occupancy.set(&reading.label, reading.usage);
                    report.updated += 1;
                }
                Err(e) => {
                    warn!(
                        location = %target.backend_key,
                        library = %target.label,
                        kind = e.kind().as_str(),
                        timeout = e.is_timeout(),
                        error = %e,
                        "scrape failed, keeping previous value"
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Scrape, sleep, repeat. Never returns.
    pub async fn run(self) {
        loop {
            info!("Scraping TUM Library occupancy...");
            let report = self.run_cycle().await;
            if report.failed > 0 {
                warn!(
                    updated = report.updated,
                    failed = report.failed,
                    "scrape cycle finished with errors"
                );
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Start the loop on its own task. The handle may be dropped; the task keeps running.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
