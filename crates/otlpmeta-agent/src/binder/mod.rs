//! Meter binders: one-shot, conditional gauge registration.
//!
//! Platform sensitivity lives entirely in [`probe`]; binders only ask whether
//! a capability is present and never branch on OS names.

pub mod fd;
pub mod host;
pub mod probe;

pub use fd::{FileDescriptorMetrics, PROCESS_MAX_FDS, PROCESS_OPEN_FDS};
pub use host::{default_introspection, ProcIntrospection, Unsupported};
pub use probe::{probe_file_descriptors, FdAccessor, FileDescriptorStats, OsIntrospection};

use crate::obs::MeterRegistry;

/// Something that registers meters into a registry.
pub trait MeterBinder {
    fn bind_to(&self, registry: &dyn MeterRegistry);
}
