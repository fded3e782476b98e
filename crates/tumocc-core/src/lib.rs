//! tumocc core: runtime-free domain types for the library occupancy exporter.
//!
//! This crate defines the target registry, the backend wire format and the
//! error surface shared by the exporter. It carries no HTTP or async runtime
//! dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `TumOccError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod reading;
pub mod target;

/// Shared result type.
pub use error::{ErrorKind, Result, TumOccError};
pub use reading::OccupancyReading;
pub use target::Target;
