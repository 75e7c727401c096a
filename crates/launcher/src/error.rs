//! Error types for process lifecycle operations
//!
//! Deliberately small: expected cleanup contention is retried and then
//! logged, never surfaced, so only genuinely unexpected I/O failures ever
//! reach callers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LauncherError>;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
