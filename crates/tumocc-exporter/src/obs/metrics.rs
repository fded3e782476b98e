//! Occupancy gauge store.
//!
//! One float gauge keyed by a single label value, backed by `DashMap`. Values
//! are held as `f64` bit patterns in `AtomicU64`, so readers copy either the
//! previous or the new value and never a partial write. Series are created on
//! first `set` and never removed.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

pub const OCCUPANCY_METRIC: &str = "tum_library_occupancy_percent";
pub const OCCUPANCY_HELP: &str = "Current occupancy of TUM branch libraries in percent.";
pub const OCCUPANCY_LABEL: &str = "library";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Sample value formatting as done by the Prometheus Go client
/// (`strconv` shortest `%g`): plain decimals for exponents in `-4..6`,
/// otherwise `d.ddde±XX` with at least two exponent digits.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v == f64::INFINITY {
        return "+Inf".into();
    }
    if v == f64::NEG_INFINITY {
        return "-Inf".into();
    }
    if v == 0.0 {
        return v.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-5`.
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return v.to_string();
    };
    if (-4..6).contains(&exp) {
        return v.to_string();
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

/// Float gauge with one label dimension.
pub struct GaugeVec {
    name: &'static str,
    help: &'static str,
    label: &'static str,
    map: DashMap<String, AtomicU64>,
}

impl GaugeVec {
    pub fn new(name: &'static str, help: &'static str, label: &'static str) -> Self {
        Self {
            name,
            help,
            label,
            map: DashMap::new(),
        }
    }

    /// Upsert: overwrite the current value for `label_value`.
    pub fn set(&self, label_value: &str, v: f64) {
        if let Some(g) = self.map.get(label_value) {
            g.store(v.to_bits(), Ordering::Relaxed);
            return;
        }
        self.map
            .entry(label_value.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self, label_value: &str) -> Option<f64> {
        self.map
            .get(label_value)
            .map(|g| f64::from_bits(g.load(Ordering::Relaxed)))
    }

    /// Every label ever set with its current value, sorted by label.
    pub fn snapshot(&self) -> Vec<(String, f64)> {
        let mut out: Vec<(String, f64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), f64::from_bits(r.value().load(Ordering::Relaxed))))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(self.help));
        let _ = writeln!(out, "# TYPE {} gauge", self.name);
        for (label_value, v) in self.snapshot() {
            let _ = writeln!(
                out,
                "{}{{{}=\"{}\"}} {}",
                self.name,
                self.label,
                escape_label(&label_value),
                format_value(v)
            );
        }
    }
}

/// Metric state shared by the scrape scheduler (writer) and `/metrics` (readers).
pub struct ExporterMetrics {
    pub occupancy: GaugeVec,
}

impl Default for ExporterMetrics {
    fn default() -> Self {
        Self {
            occupancy: GaugeVec::new(OCCUPANCY_METRIC, OCCUPANCY_HELP, OCCUPANCY_LABEL),
        }
    }
}

impl ExporterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.occupancy.is_empty() {
            self.occupancy.render(&mut out);
        }
        out
    }
}
