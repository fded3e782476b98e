//! HTTP fetcher for the occupancy display backend.
//!
//! One `POST` per target: a urlencoded form with a single field holding
//! `{"location":"<backend_key>"}`, plus the AJAX marker header. The status
//! code is not checked on its own; whatever body comes back must decode as a
//! usage document or the target is skipped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use tumocc_core::error::{Result, TumOccError};
use tumocc_core::protocol::request::LocationQuery;
use tumocc_core::protocol::response::UsageResponse;
use tumocc_core::protocol::{AJAX_HEADER_NAME, AJAX_HEADER_VALUE};
use tumocc_core::{OccupancyReading, Target};

use crate::config::UpstreamSection;
use crate::upstream::OccupancySource;

pub struct HttpFetcher {
    client: Client,
    url: String,
    form_field: String,
}

impl HttpFetcher {
    pub fn new(
        url: impl Into<String>,
        form_field: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TumOccError::Request(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
            form_field: form_field.into(),
        })
    }

    pub fn from_config(cfg: &UpstreamSection) -> Result<Self> {
        Self::new(cfg.url.clone(), cfg.form_field.clone(), cfg.timeout())
    }
}

fn transport_error(e: reqwest::Error) -> TumOccError {
    if e.is_builder() {
        return TumOccError::Request(e.to_string());
    }
    TumOccError::Transport {
        timeout: e.is_timeout(),
        message: e.to_string(),
    }
}

#[async_trait]
impl OccupancySource for HttpFetcher {
    async fn fetch(&self, target: &Target) -> Result<OccupancyReading> {
        let payload = LocationQuery::new(&target.backend_key).to_json()?;

        let resp = self
            .client
            .post(&self.url)
            .header(AJAX_HEADER_NAME, AJAX_HEADER_VALUE)
            .form(&[(self.form_field.as_str(), payload.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e)
            } else {
                TumOccError::Decode(format!("read body: {e}"))
            }
        })?;
        debug!(target_key = %target.backend_key, %status, len = body.len(), "upstream response");

        let usage = UsageResponse::from_slice(&body)?;
        Ok(OccupancyReading::from_response(target, usage))
    }
}
