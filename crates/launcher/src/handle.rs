//! Process handle capability
//!
//! The registry supervises handles, it does not create them: spawning,
//! shutdown sequencing, and CDP wiring live with the implementor. The
//! registry only needs to tell stopped from running, stop best-effort,
//! and read the launch configuration for cleanup.

use crate::config::LaunchConfig;

/// One externally-spawned browser process under supervision
pub trait ProcessHandle: Send + Sync {
    /// Stable handle identity, normally the launch config id.
    fn id(&self) -> &str;

    /// Whether the process has already been stopped.
    fn is_stopped(&self) -> bool;

    /// Stop the process. Must be idempotent; called synchronously during
    /// registry drain, where a failure is logged and never aborts the
    /// drain of other handles.
    fn stop(&self) -> std::io::Result<()>;

    /// Launch configuration, consulted for the data dir and its ownership.
    fn config(&self) -> &LaunchConfig;
}
