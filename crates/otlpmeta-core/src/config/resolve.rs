//! Tiered attribute resolution.

use crate::attributes::{parse_attributes, AttributeMap};

use super::env::{EnvVarPair, Environment};
use super::source::ConfigSource;

/// Look up `key` and return it only when it carries content.
fn configured<S: ConfigSource + ?Sized>(source: &S, key: &str) -> Option<String> {
    source.get(key).filter(|v| !v.trim().is_empty())
}

/// Parse the generic entry, then write the specific entry on top.
pub fn resolve_from_environment<E: Environment + ?Sized>(env: &E, pair: &EnvVarPair) -> AttributeMap {
    let mut base = parse_attributes(env.var(pair.generic).as_deref());
    base.overlay(parse_attributes(env.var(pair.specific).as_deref()));
    base
}

/// Explicit configuration wins outright; the environment is only consulted
/// when `key` is unset or blank. The two tiers are never merged.
pub fn resolve_with_env_fallback<S, E>(
    source: &S,
    key: &str,
    env: &E,
    pair: &EnvVarPair,
) -> AttributeMap
where
    S: ConfigSource + ?Sized,
    E: Environment + ?Sized,
{
    if let Some(raw) = configured(source, key) {
        let out = parse_attributes(Some(&raw));
        tracing::debug!(key, tier = "config", keys = out.len(), "attributes resolved");
        return out;
    }

    let out = resolve_from_environment(env, pair);
    tracing::debug!(
        key,
        tier = "environment",
        generic = pair.generic,
        specific = pair.specific,
        keys = out.len(),
        "attributes resolved"
    );
    out
}

/// Explicit configuration only; no environment tier.
pub fn resolve_config_only<S: ConfigSource + ?Sized>(source: &S, key: &str) -> AttributeMap {
    let out = parse_attributes(configured(source, key).as_deref());
    tracing::debug!(key, tier = "config", keys = out.len(), "attributes resolved");
    out
}
