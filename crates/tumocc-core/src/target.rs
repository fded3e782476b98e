//! Scrape targets: backend location key -> exposed `library` label.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Result, TumOccError};

/// One library location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Value sent upstream as `location`.
    pub backend_key: String,
    /// Value of the `library` label on the exposed series.
    pub label: String,
}

impl Target {
    pub fn new(backend_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            backend_key: backend_key.into(),
            label: label.into(),
        }
    }
}

const BUILTIN: [(&str, &str); 7] = [
    ("Stammgelaende", "Stammgelände"),
    ("Maschinenwesen", "Maschinenwesen"),
    ("Physik", "Physik"),
    ("Sport", "Sport- & Gesundheitswissenschaften"),
    ("Weihenstephan", "Weihenstephan"),
    ("Chemie", "Chemie"),
    ("Straubing", "Straubing"),
];

/// Built-in target registry, in scrape order.
pub fn builtin_targets() -> Vec<Target> {
    BUILTIN.iter().map(|(k, l)| Target::new(*k, *l)).collect()
}

/// Reject empty registries, blank keys/labels and duplicate labels.
pub fn validate_targets(targets: &[Target]) -> Result<()> {
    if targets.is_empty() {
        return Err(TumOccError::Config("targets must not be empty".into()));
    }
    let mut seen = HashSet::with_capacity(targets.len());
    for t in targets {
        if t.backend_key.trim().is_empty() {
            return Err(TumOccError::Config(format!(
                "target with label {:?} has an empty backend_key",
                t.label
            )));
        }
        if t.label.trim().is_empty() {
            return Err(TumOccError::Config(format!(
                "target {:?} has an empty label",
                t.backend_key
            )));
        }
        if !seen.insert(t.label.as_str()) {
            return Err(TumOccError::Config(format!(
                "duplicate target label: {:?}",
                t.label
            )));
        }
    }
    Ok(())
}
