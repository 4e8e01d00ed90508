//! Explicit configuration sources (highest precedence tier).

use std::collections::BTreeMap;

/// Lookup capability supplied by the exporter configuration.
///
/// `None`, empty, and blank values all mean "not configured".
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Flat `key -> value` property store, e.g. deserialized from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfigSource {
    props: BTreeMap<String, String>,
}

impl MapConfigSource {
    pub fn new(props: BTreeMap<String, String>) -> Self {
        Self { props }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfigSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl ConfigSource for MapConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.props.get(key).cloned()
    }
}
