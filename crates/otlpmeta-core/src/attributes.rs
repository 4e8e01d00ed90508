//! `key=value` attribute strings.
//!
//! The format is the one used by `OTEL_EXPORTER_OTLP_HEADERS` and friends:
//! comma-separated entries, each split on its first `=`. Parsing is lenient
//! by contract: entries without `=` or with a blank key are dropped, never
//! reported.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered, unique-keyed string map.
///
/// Insertion order is kept so downstream serialization is deterministic.
/// Re-inserting an existing key replaces its value in place.
/// Equality ignores order: same keys, same values.
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous value for `key`, if any.
    ///
    /// Lookup is a linear scan; header and attribute lists are short. Switch
    /// to an indexed map if they ever grow to hundreds of entries.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Write every entry of `other` on top of `self`.
    /// Keys only present in `self` are left untouched.
    pub fn overlay(&mut self, other: AttributeMap) {
        for (k, v) in other.entries {
            self.insert(k, v);
        }
    }
}

impl PartialEq for AttributeMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for AttributeMap {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            m.serialize_entry(k, v)?;
        }
        m.end()
    }
}

/// Parse a comma-separated `key=value` list.
///
/// `None`, empty, and comma/whitespace-only input all yield an empty map.
pub fn parse_attributes(raw: Option<&str>) -> AttributeMap {
    let mut out = AttributeMap::new();
    let Some(raw) = raw else { return out; };

    for entry in raw.split(',') {
        // no '=' => orphan token, dropped
        let Some((key, value)) = entry.split_once('=') else { continue; };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        out.insert(key, value.trim());
    }
    out
}
