//! Location query (JSON inside a urlencoded form field).

use serde::Serialize;

use crate::error::{Result, TumOccError};

/// Body of the form field, serialized as `{"location":"<backend_key>"}`.
#[derive(Debug, Serialize)]
pub struct LocationQuery<'a> {
    pub location: &'a str,
}

impl<'a> LocationQuery<'a> {
    pub fn new(backend_key: &'a str) -> Self {
        Self { location: backend_key }
    }

    /// JSON text placed as the form field value.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TumOccError::Request(format!("encode location query: {e}")))
    }
}
