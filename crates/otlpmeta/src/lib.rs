//! Top-level facade crate for otlpmeta.
//!
//! Re-exports the core resolver and the agent library so users can depend on a single crate.

pub mod core {
    pub use otlpmeta_core::*;
}

pub mod agent {
    pub use otlpmeta_agent::*;
}
