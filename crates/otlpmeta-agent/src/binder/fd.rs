//! Process file-descriptor gauges.

use std::sync::Arc;

use crate::obs::{MeterRegistry, Tags};

use super::host::default_introspection;
use super::probe::{probe_file_descriptors, OsIntrospection};
use super::MeterBinder;

pub const PROCESS_OPEN_FDS: &str = "process.open.fds";
pub const PROCESS_MAX_FDS: &str = "process.max.fds";

/// Registers `process.open.fds` / `process.max.fds` when the host can report
/// them; silently does nothing otherwise.
pub struct FileDescriptorMetrics {
    host: Arc<dyn OsIntrospection>,
    tags: Tags,
}

impl FileDescriptorMetrics {
    /// Use the platform's default introspection handle.
    pub fn new(tags: Tags) -> Self {
        Self::with_host(default_introspection(), tags)
    }

    pub fn with_host(host: Arc<dyn OsIntrospection>, tags: Tags) -> Self {
        Self { host, tags }
    }
}

impl MeterBinder for FileDescriptorMetrics {
    fn bind_to(&self, registry: &dyn MeterRegistry) {
        let Some(fds) = probe_file_descriptors(Arc::clone(&self.host)) else {
            tracing::debug!("file descriptor counts unavailable; gauges not bound");
            return;
        };

        let open = fds.clone();
        registry.register_gauge(PROCESS_OPEN_FDS, &self.tags, Arc::new(move || open.open_count() as f64));
        registry.register_gauge(PROCESS_MAX_FDS, &self.tags, Arc::new(move || fds.max_count() as f64));

        tracing::info!(tags = self.tags.len(), "file descriptor gauges bound");
    }
}
