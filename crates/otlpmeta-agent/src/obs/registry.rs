//! Gauge registry keyed by `(name, tags)`.
//!
//! Tags are flattened into sorted key vectors to keep deterministic ordering,
//! so `[("b","2"),("a","1")]` and `[("a","1"),("b","2")]` address the same
//! gauge.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

/// Live value supplier, called on every read.
pub type GaugeFn = Arc<dyn Fn() -> f64 + Send + Sync>;

/// Sorted, key-unique tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tags(Vec<(String, String)>);

impl Tags {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from pairs. A later pair replaces an earlier one with the same key.
    pub fn of(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Tags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let sorted: BTreeMap<String, String> = iter.into_iter().collect();
        Tags(sorted.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for Tags {
    fn from(map: BTreeMap<String, String>) -> Self {
        Tags(map.into_iter().collect())
    }
}

/// Write side of a metric registry, as seen by binders.
pub trait MeterRegistry: Send + Sync {
    /// Register a gauge. Registering an existing `(name, tags)` is a no-op.
    fn register_gauge(&self, name: &str, tags: &Tags, supplier: GaugeFn);
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Prometheus metric names cannot contain dots.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == ':' { c } else { '_' })
        .collect()
}

#[derive(Default)]
pub struct GaugeRegistry {
    map: DashMap<(String, Tags), GaugeFn>,
}

impl GaugeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Current value of the gauge registered under exactly `(name, tags)`.
    pub fn find(&self, name: &str, tags: &Tags) -> Option<f64> {
        let supplier = self
            .map
            .get(&(name.to_string(), tags.clone()))
            .map(|r| Arc::clone(r.value()))?;
        Some(supplier())
    }

    /// Whether any gauge with this name exists, regardless of tags.
    pub fn contains(&self, name: &str) -> bool {
        self.map.iter().any(|r| r.key().0 == name)
    }

    /// Snapshot of all gauges, sorted by name then tags.
    ///
    /// Suppliers are invoked after the map shards are released.
    pub fn sample(&self) -> Vec<(String, Tags, f64)> {
        let mut handles: Vec<((String, Tags), GaugeFn)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect();
        handles.sort_by(|a, b| a.0.cmp(&b.0));

        handles
            .into_iter()
            .map(|((name, tags), f)| (name, tags, f()))
            .collect()
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut last: Option<String> = None;
        for (name, tags, value) in self.sample() {
            let name = sanitize_name(&name);
            if last.as_deref() != Some(name.as_str()) {
                let _ = writeln!(out, "# TYPE {} gauge", name);
                last = Some(name.clone());
            }
            let label_str = tags
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", sanitize_name(k), escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, value);
        }
        out
    }
}

impl MeterRegistry for GaugeRegistry {
    fn register_gauge(&self, name: &str, tags: &Tags, supplier: GaugeFn) {
        // first registration wins
        self.map
            .entry((name.to_string(), tags.clone()))
            .or_insert(supplier);
    }
}
