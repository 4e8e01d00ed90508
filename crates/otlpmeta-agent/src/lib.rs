//! otlpmeta agent library entry.
//!
//! Wires the config loader, the gauge registry, and the process binders into
//! a small HTTP agent. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod binder;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
