//! In-process gauge registry.
//!
//! Gauges are registered once with a value supplier and evaluated on every
//! read; the registry never stores a sampled value. Rendering produces
//! Prometheus text for the `/metrics` endpoint.

pub mod registry;

pub use registry::{GaugeFn, GaugeRegistry, MeterRegistry, Tags};
