//! Subtree serialization to markup text
//!
//! The one traversal that performs I/O: each child contributes its own
//! markup (locally if materialized, otherwise through one transport fetch)
//! followed by the serialization of its subtree, in document order.
//! Fetches are awaited sequentially; a transport failure fails the whole
//! call rather than producing partial output.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::error::Result;
use crate::types::{BackendNodeId, DomNode};

/// Capability to fetch a node's outer markup by identity
///
/// Backed in production by a CDP session issuing `DOM.getOuterHTML`.
/// Errors are surfaced as [`crate::DomError::Transport`] and propagate out
/// of [`html_from_tree`] untouched.
#[async_trait]
pub trait MarkupTransport: Send + Sync {
    async fn outer_html(&self, backend_node_id: BackendNodeId) -> Result<String>;
}

/// Concatenate the markup of every descendant of `tree` in document order.
///
/// A tree with no children yields the empty string. Sibling output order
/// always follows document order, never fetch completion order.
pub async fn html_from_tree(tree: &DomNode, transport: &dyn MarkupTransport) -> Result<String> {
    html_from_tree_inner(tree, transport).await
}

// Recursive async fn needs an explicitly boxed future.
fn html_from_tree_inner<'a>(
    tree: &'a DomNode,
    transport: &'a dyn MarkupTransport,
) -> BoxFuture<'a, Result<String>> {
    async move {
        let mut out = String::new();
        for child in &tree.children {
            match &child.outer_html {
                Some(html) => out.push_str(html),
                None => out.push_str(&transport.outer_html(child.backend_node_id).await?),
            }
            out.push_str(&html_from_tree_inner(child, transport).await?);
        }
        Ok(out)
    }
    .boxed()
}
