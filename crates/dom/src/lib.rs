//! DOM tree query and serialization over remotely-backed nodes
//!
//! The node tree comes from a CDP `DOM.getDocument` response. Leaves may be
//! fully materialized locally (they carry their own markup) or require an
//! asynchronous fetch through a [`MarkupTransport`] to obtain it.
//!
//! ## Core Design
//!
//! ```text
//! CDP JSON → DomNode tree → find / remove (sync)
//!                         → html_from_tree (async, per-leaf fetch)
//! ```
//!
//! Tree operations assume exclusive access to one tree snapshot for the
//! duration of a call. Only serialization performs I/O; find/remove never
//! fail.

pub mod error;
pub mod query;
pub mod serialize;
pub mod types;

pub use error::{DomError, Result};
pub use query::{find_all, find_first, remove_from_tree};
pub use serialize::{html_from_tree, MarkupTransport};
pub use types::{BackendNodeId, DomNode, NodeType};
