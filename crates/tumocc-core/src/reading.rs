//! Occupancy readings produced by one fetch.

use crate::protocol::response::UsageResponse;
use crate::target::Target;

/// One decoded, clamped usage value for a label.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyReading {
    pub label: String,
    pub usage: f64,
}

impl OccupancyReading {
    pub fn from_response(target: &Target, resp: UsageResponse) -> Self {
        Self {
            label: target.label.clone(),
            usage: clamp_usage(resp.usage),
        }
    }
}

/// Floor at 0. There is no ceiling: values above 100 are published as-is.
pub fn clamp_usage(usage: f64) -> f64 {
    if usage < 0.0 {
        0.0
    } else {
        usage
    }
}
