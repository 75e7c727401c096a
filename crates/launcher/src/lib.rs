//! Browser process lifecycle management
//!
//! Tracks live, externally-spawned browser processes through a [`Registry`]
//! and tears them down at process shutdown: each handle is stopped and its
//! engine-owned profile directory removed with a bounded retry, absorbing
//! the brief window in which a freshly-stopped process still holds
//! filesystem locks.
//!
//! The registry is an explicit value, injected into whatever creates
//! process handles. No module-level global: tests can run any number of
//! independent registries side by side.

pub mod config;
pub mod error;
pub mod handle;
pub mod port;
pub mod registry;

pub use config::LaunchConfig;
pub use error::{LauncherError, Result};
pub use handle::ProcessHandle;
pub use port::free_port;
pub use registry::Registry;
