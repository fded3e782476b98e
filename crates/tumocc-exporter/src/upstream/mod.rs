//! Upstream occupancy sources.

pub mod http;

use async_trait::async_trait;

use tumocc_core::error::Result;
use tumocc_core::{OccupancyReading, Target};

pub use http::HttpFetcher;

/// Produces one reading per call. Implementations must bound their own latency.
#[async_trait]
pub trait OccupancySource: Send + Sync {
    async fn fetch(&self, target: &Target) -> Result<OccupancyReading>;
}
