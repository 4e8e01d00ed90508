//! otlpmeta core: exporter metadata resolution.
//!
//! This crate turns delimited `key=value` strings into attribute maps and
//! resolves the effective exporter headers and resource attributes from an
//! explicit configuration source and the process environment. It carries no
//! transport or runtime dependencies so it can be reused by any exporter.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Resolution never
//! fails: every malformed or missing input degrades to an empty map.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod attributes;
pub mod config;
pub mod error;

pub use attributes::{parse_attributes, AttributeMap};
pub use config::{ConfigSource, Environment, EnvVarPair, MapConfigSource, OtlpConfig, ProcessEnv};
/// Shared result type.
pub use error::{OtlpMetaError, Result};
