//! Error types for DOM operations
//!
//! Simple, flat error hierarchy. Local tree operations never fail; only
//! parsing and serialization produce errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("CDP protocol error: {0}")]
    Cdp(String),

    #[error("Invalid node type: {0}")]
    InvalidNodeType(u8),

    #[error("Transport error: {0}")]
    Transport(String),
}
