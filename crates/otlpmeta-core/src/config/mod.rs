//! Exporter configuration: sources, environment, and metadata resolution.
//!
//! Precedence for headers is strict and tiered:
//! 1. an explicit, non-blank `otlp.headers` value replaces everything else;
//! 2. otherwise the generic and signal-specific environment variables are
//!    overlaid on each other (specific wins per key).
//!
//! Resource attributes only have the first tier.

pub mod env;
pub mod resolve;
pub mod source;

use std::time::Duration;

use crate::attributes::AttributeMap;
use crate::error::{OtlpMetaError, Result};

pub use env::{Environment, EnvVarPair, ProcessEnv, METRICS_HEADERS};
pub use resolve::{resolve_config_only, resolve_from_environment, resolve_with_env_fallback};
pub use source::{ConfigSource, MapConfigSource};

/// Default OTLP/HTTP metrics endpoint.
pub const DEFAULT_URL: &str = "http://localhost:4318/v1/metrics";
/// Default export step.
pub const DEFAULT_STEP: Duration = Duration::from_secs(60);

/// Typed view over a [`ConfigSource`] using the `otlp.` key prefix.
///
/// Every accessor reads its inputs fresh; nothing is cached, so two calls
/// with unchanged inputs produce equal results.
#[derive(Debug, Clone)]
pub struct OtlpConfig<S, E = ProcessEnv> {
    source: S,
    env: E,
}

impl<S: ConfigSource> OtlpConfig<S, ProcessEnv> {
    /// Bind to the real process environment.
    pub fn new(source: S) -> Self {
        Self { source, env: ProcessEnv }
    }
}

impl<S: ConfigSource, E: Environment> OtlpConfig<S, E> {
    pub fn with_env(source: S, env: E) -> Self {
        Self { source, env }
    }

    pub fn prefix(&self) -> &'static str {
        "otlp"
    }

    fn key(&self, name: &str) -> String {
        format!("{}.{}", self.prefix(), name)
    }

    /// Raw lookup of `otlp.<name>`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.source.get(&self.key(name))
    }

    /// Headers sent with every export request.
    pub fn headers(&self) -> AttributeMap {
        resolve_with_env_fallback(&self.source, &self.key("headers"), &self.env, &METRICS_HEADERS)
    }

    /// Resource attributes attached to exported metrics.
    ///
    /// Only the explicit configuration tier applies here.
    pub fn resource_attributes(&self) -> AttributeMap {
        resolve_config_only(&self.source, &self.key("resourceAttributes"))
    }

    pub fn url(&self) -> String {
        match self.get("url") {
            Some(u) if !u.trim().is_empty() => u.trim().to_string(),
            _ => DEFAULT_URL.to_string(),
        }
    }

    /// Export interval. Absent or blank falls back to [`DEFAULT_STEP`].
    pub fn step(&self) -> Result<Duration> {
        match self.get("step") {
            Some(s) if !s.trim().is_empty() => parse_duration(s.trim()),
            _ => Ok(DEFAULT_STEP),
        }
    }

    /// Validate every fallible accessor once, at setup time.
    pub fn validate(&self) -> Result<()> {
        self.step()?;
        Ok(())
    }
}

/// Parse `500ms`, `30s`, `5m`, `1h`, `1d`, or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let bad = || OtlpMetaError::BadConfig(format!("invalid duration: {s}"));

    let (num, unit_ms): (&str, u64) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60_000)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3_600_000)
    } else if let Some(n) = s.strip_suffix('d') {
        (n, 86_400_000)
    } else {
        (s, 1_000)
    };

    let n: u64 = num.trim().parse().map_err(|_| bad())?;
    let ms = n.checked_mul(unit_ms).ok_or_else(bad)?;
    if ms == 0 {
        return Err(OtlpMetaError::BadConfig(format!("duration must be positive: {s}")));
    }
    Ok(Duration::from_millis(ms))
}
