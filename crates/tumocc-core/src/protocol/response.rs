//! Usage document returned by the backend.
//!
//! Only `usage` is read; any other fields are ignored. A missing, null or
//! non-numeric `usage` is a decode failure rather than an implicit zero.
//! Only the first JSON value of the body is decoded: the backend may append
//! notice text after the document, and that tail is ignored.

use serde::Deserialize;

use crate::error::{Result, TumOccError};

#[derive(Debug, Deserialize)]
pub struct UsageResponse {
    pub usage: f64,
}

impl UsageResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<UsageResponse>()
            .next()
        {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(e)) => Err(TumOccError::Decode(e.to_string())),
            None => Err(TumOccError::Decode("empty body".into())),
        }
    }
}
