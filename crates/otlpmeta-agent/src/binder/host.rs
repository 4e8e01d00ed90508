//! Platform introspection handles.
//!
//! On Linux, file-descriptor counts come from procfs: the number of entries
//! under `/proc/self/fd` and the soft "Max open files" limit in
//! `/proc/self/limits`. Other targets expose no file-descriptor capability.

use std::sync::Arc;

use super::probe::{FileDescriptorStats, OsIntrospection};

/// Returned by accessors when the host value cannot be read.
pub const UNKNOWN: i64 = -1;

/// Handle with no optional capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl OsIntrospection for Unsupported {}

/// procfs-backed handle for the current process.
#[derive(Debug, Clone)]
pub struct ProcIntrospection {
    root: std::path::PathBuf,
}

impl Default for ProcIntrospection {
    fn default() -> Self {
        Self::with_root("/proc/self")
    }
}

impl ProcIntrospection {
    /// Point at an alternate procfs process directory.
    pub fn with_root(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(target_os = "linux")]
impl FileDescriptorStats for ProcIntrospection {
    fn open_file_descriptor_count(&self) -> i64 {
        match std::fs::read_dir(self.root.join("fd")) {
            Ok(rd) => rd.count() as i64,
            Err(e) => {
                tracing::debug!(error = %e, "read fd dir failed");
                UNKNOWN
            }
        }
    }

    fn max_file_descriptor_count(&self) -> i64 {
        match std::fs::read_to_string(self.root.join("limits")) {
            Ok(s) => parse_max_open_files(&s).unwrap_or(UNKNOWN),
            Err(e) => {
                tracing::debug!(error = %e, "read limits failed");
                UNKNOWN
            }
        }
    }
}

impl OsIntrospection for ProcIntrospection {
    #[cfg(target_os = "linux")]
    fn file_descriptor_stats(self: Arc<Self>) -> Option<Arc<dyn FileDescriptorStats>> {
        // procfs may be missing in sandboxes
        if self.root.join("fd").is_dir() && self.root.join("limits").is_file() {
            Some(self)
        } else {
            None
        }
    }
}

/// The runtime's default handle for this process.
pub fn default_introspection() -> Arc<dyn OsIntrospection> {
    Arc::new(ProcIntrospection::default())
}

/// Soft limit from the `Max open files` row of a procfs limits table.
/// `unlimited` maps to `i64::MAX`.
pub fn parse_max_open_files(limits: &str) -> Option<i64> {
    let line = limits.lines().find(|l| l.starts_with("Max open files"))?;
    let soft = line["Max open files".len()..].split_whitespace().next()?;
    if soft == "unlimited" {
        return Some(i64::MAX);
    }
    soft.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::probe::probe_file_descriptors;

    const LIMITS: &str = "\
Limit                     Soft Limit           Hard Limit           Units     
Max cpu time              unlimited            unlimited            seconds   
Max open files            1024                 524288               files     
Max locked memory         8388608              8388608              bytes     
";

    #[test]
    fn parses_soft_limit() {
        assert_eq!(parse_max_open_files(LIMITS), Some(1024));
    }

    #[test]
    fn unlimited_and_missing() {
        let s = "Max open files            unlimited            unlimited            files\n";
        assert_eq!(parse_max_open_files(s), Some(i64::MAX));
        assert_eq!(parse_max_open_files("Max cpu time 1 1 seconds\n"), None);
        assert_eq!(parse_max_open_files(""), None);
    }

    #[test]
    fn unsupported_has_no_capability() {
        assert!(probe_file_descriptors(Arc::new(Unsupported)).is_none());
    }

    #[test]
    fn missing_procfs_root_has_no_capability() {
        let h = ProcIntrospection::with_root("/nonexistent/otlpmeta/proc");
        assert!(probe_file_descriptors(Arc::new(h)).is_none());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn live_procfs_counts() {
        let acc = probe_file_descriptors(default_introspection()).expect("procfs on linux");
        assert!(acc.open_count() > 0);
        assert!(acc.max_count() > 0);
    }
}
