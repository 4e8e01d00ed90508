//! Capability probing over host introspection handles.

use std::sync::Arc;

/// File-descriptor counters offered by some hosts.
///
/// Values are passed through as reported; negative sentinels are allowed.
pub trait FileDescriptorStats: Send + Sync {
    fn open_file_descriptor_count(&self) -> i64;
    fn max_file_descriptor_count(&self) -> i64;
}

/// General-purpose OS introspection handle.
///
/// Optional capabilities are exposed through query methods that default to
/// `None`; a handle opts in by returning itself (or a delegate).
pub trait OsIntrospection: Send + Sync {
    fn file_descriptor_stats(self: Arc<Self>) -> Option<Arc<dyn FileDescriptorStats>> {
        None
    }
}

/// Bound file-descriptor accessor. Every call hits the host.
#[derive(Clone)]
pub struct FdAccessor {
    stats: Arc<dyn FileDescriptorStats>,
}

impl FdAccessor {
    pub fn open_count(&self) -> i64 {
        self.stats.open_file_descriptor_count()
    }

    pub fn max_count(&self) -> i64 {
        self.stats.max_file_descriptor_count()
    }
}

impl std::fmt::Debug for FdAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FdAccessor").finish_non_exhaustive()
    }
}

/// `Some` only if `host` offers both file-descriptor counters.
pub fn probe_file_descriptors(host: Arc<dyn OsIntrospection>) -> Option<FdAccessor> {
    host.file_descriptor_stats().map(|stats| FdAccessor { stats })
}
