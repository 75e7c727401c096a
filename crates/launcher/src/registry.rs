//! Process-wide handle registry and teardown
//!
//! Handles are inserted when a process is launched and leave only through a
//! full [`Registry::drain_and_cleanup`] at shutdown. Drain stops whatever
//! still runs and removes engine-owned profile directories with a bounded
//! retry: a freshly-stopped browser can hold locks on its profile for a
//! brief window after termination, and the retry absorbs that race without
//! blocking indefinitely.

use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::handle::ProcessHandle;

const CLEANUP_ATTEMPTS: u32 = 5;
const CLEANUP_BACKOFF: Duration = Duration::from_millis(150);

/// Set of live process handles, keyed by handle identity
pub struct Registry {
    handles: DashMap<String, Arc<dyn ProcessHandle>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            handles: DashMap::new(),
        }
    }

    /// Track a handle. Re-registering the same identity is a no-op.
    pub fn register(&self, handle: Arc<dyn ProcessHandle>) {
        let id = handle.id().to_string();
        tracing::debug!(handle = %id, "registering process handle");
        self.handles.entry(id).or_insert(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Stop every tracked handle and clean up engine-owned data dirs.
    ///
    /// Operates on a snapshot taken at call time; handles registered
    /// concurrently with the drain are not picked up. One handle's stop or
    /// cleanup problem never prevents the remaining handles from being
    /// processed. The retry sleeps run on the tokio timer, so a drain in
    /// flight never blocks unrelated registry use.
    pub async fn drain_and_cleanup(&self) {
        let snapshot: Vec<Arc<dyn ProcessHandle>> = self
            .handles
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        self.handles.clear();

        for handle in snapshot {
            if !handle.is_stopped() {
                if let Err(e) = handle.stop() {
                    tracing::warn!(handle = %handle.id(), error = %e, "failed to stop process");
                }
            }

            let config = handle.config();
            if config.custom_data_dir {
                // Caller owns the dir, leave it alone.
                continue;
            }

            match remove_dir_with_retry(&config.user_data_dir).await {
                Ok(()) => {
                    tracing::info!(
                        path = %config.user_data_dir.display(),
                        "removed temp profile"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        path = %config.user_data_dir.display(),
                        error = %e,
                        "unexpected error removing data dir"
                    );
                }
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove a directory tree, retrying transient lock errors.
///
/// An already-absent path is success. Permission and busy errors are
/// retried up to [`CLEANUP_ATTEMPTS`] times with a fixed backoff, then
/// degraded to a warning. Anything else is unexpected and propagates.
async fn remove_dir_with_retry(path: &Path) -> std::io::Result<()> {
    retry_removal(path, tokio::fs::remove_dir_all).await
}

// Retry policy, generic over the removal operation so the attempt count
// and backoff can be exercised without a lockable filesystem.
async fn retry_removal<'a, F, Fut>(path: &'a Path, mut remove: F) -> std::io::Result<()>
where
    F: FnMut(&'a Path) -> Fut,
    Fut: std::future::Future<Output = std::io::Result<()>>,
{
    for attempt in 1..=CLEANUP_ATTEMPTS {
        match remove(path).await {
            Ok(()) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) if is_lock_error(e.kind()) => {
                if attempt == CLEANUP_ATTEMPTS {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "could not remove data dir, consider removing it by hand"
                    );
                    return Ok(());
                }
                tokio::time::sleep(CLEANUP_BACKOFF).await;
            }
            Err(e) => return Err(e),
        }
    }
    unreachable!("retry loop always returns")
}

// Error kinds a just-terminated process can cause transiently while the OS
// still holds locks on its files.
fn is_lock_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::PermissionDenied | ErrorKind::ResourceBusy | ErrorKind::DirectoryNotEmpty
    )
}
