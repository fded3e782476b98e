//! tumocc exporter library entry.
//!
//! Polls the TUM library occupancy backend on a fixed interval and serves the
//! latest values as a Prometheus gauge. Consumed by the binary (`main.rs`) and
//! by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod scheduler;
pub mod upstream;
