//! Top-level facade crate for tumocc.
//!
//! Re-exports the core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use tumocc_core::*;
}

pub mod exporter {
    pub use tumocc_exporter::*;
}
