//! Environment reader.
//!
//! Production code reads the real process environment through [`ProcessEnv`];
//! tests hand in a map so they never mutate process-wide state.

use std::collections::{BTreeMap, HashMap};

/// Read access to named environment entries.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment, read on every call (never cached).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // non-unicode values are treated as unset
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// A generic variable and the narrower, signal-specific one overriding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVarPair {
    pub generic: &'static str,
    pub specific: &'static str,
}

/// Header variables for the metrics signal.
pub const METRICS_HEADERS: EnvVarPair = EnvVarPair {
    generic: "OTEL_EXPORTER_OTLP_HEADERS",
    specific: "OTEL_EXPORTER_OTLP_METRICS_HEADERS",
};
