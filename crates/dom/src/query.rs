//! Predicate search and identity-keyed removal over a node tree
//!
//! All three operations walk the strict subtree of the argument: the root
//! itself is never tested and never removed. They are synchronous, perform
//! no I/O, and assume no concurrent mutation of the tree for the duration
//! of one call. Predicates must not alter tree shape while traversal is in
//! progress.

use crate::types::{BackendNodeId, DomNode};

/// Return the first node in `tree`'s strict subtree satisfying `predicate`.
///
/// Depth-first: each child is tested before its own subtree is searched,
/// and a child's entire subtree is exhausted before the next sibling.
pub fn find_first<'a>(
    tree: &'a DomNode,
    predicate: impl Fn(&DomNode) -> bool,
) -> Option<&'a DomNode> {
    find_first_inner(tree, &predicate)
}

fn find_first_inner<'a>(
    tree: &'a DomNode,
    predicate: &dyn Fn(&DomNode) -> bool,
) -> Option<&'a DomNode> {
    for child in &tree.children {
        if predicate(child) {
            return Some(child);
        }
        if let Some(found) = find_first_inner(child, predicate) {
            return Some(found);
        }
    }
    None
}

/// Return every node in `tree`'s strict subtree satisfying `predicate`,
/// in document order. An empty result is the no-match case.
pub fn find_all<'a>(
    tree: &'a DomNode,
    predicate: impl Fn(&DomNode) -> bool,
) -> Vec<&'a DomNode> {
    let mut out = Vec::new();
    find_all_inner(tree, &predicate, &mut out);
    out
}

fn find_all_inner<'a>(
    tree: &'a DomNode,
    predicate: &dyn Fn(&DomNode) -> bool,
    out: &mut Vec<&'a DomNode>,
) {
    for child in &tree.children {
        if predicate(child) {
            out.push(child);
        }
        find_all_inner(child, predicate, out);
    }
}

/// Remove every node whose identity equals `target` from `tree`, in place.
///
/// Identity-keyed, not predicate-keyed: matching children are dropped at
/// every level they occur, including multiple matches among one node's
/// direct children. An identity absent from the tree leaves it unchanged.
pub fn remove_from_tree(tree: &mut DomNode, target: BackendNodeId) {
    tree.children.retain(|child| child.backend_node_id != target);
    for child in &mut tree.children {
        remove_from_tree(child, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeType;

    fn element(id: BackendNodeId, name: &str) -> DomNode {
        DomNode::new(id, NodeType::Element, name)
    }

    /// root -> [div#1 -> [span#2, p#3 -> [span#4]], span#5]
    fn sample_tree() -> DomNode {
        let mut root = element(0, "HTML");
        let mut div = element(1, "DIV");
        let mut p = element(3, "P");
        p.children.push(element(4, "SPAN"));
        div.children.push(element(2, "SPAN"));
        div.children.push(p);
        root.children.push(div);
        root.children.push(element(5, "SPAN"));
        root
    }

    #[test]
    fn test_find_first_document_order() {
        let tree = sample_tree();
        let found = find_first(&tree, |n| n.node_name == "SPAN").unwrap();
        assert_eq!(found.backend_node_id, 2);
    }

    #[test]
    fn test_find_first_excludes_root() {
        let tree = sample_tree();
        assert!(find_first(&tree, |n| n.node_name == "HTML").is_none());
    }

    #[test]
    fn test_find_first_no_match() {
        let tree = sample_tree();
        assert!(find_first(&tree, |n| n.node_name == "TABLE").is_none());
    }

    #[test]
    fn test_find_all_document_order_no_duplicates() {
        let tree = sample_tree();
        let spans = find_all(&tree, |n| n.node_name == "SPAN");
        let ids: Vec<_> = spans.iter().map(|n| n.backend_node_id).collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn test_find_first_is_head_of_find_all() {
        let tree = sample_tree();
        let pred = |n: &DomNode| n.backend_node_id % 2 == 0;
        let all = find_all(&tree, pred);
        let first = find_first(&tree, pred);
        assert_eq!(
            first.map(|n| n.backend_node_id),
            all.first().map(|n| n.backend_node_id)
        );
    }

    #[test]
    fn test_find_on_empty_tree() {
        let tree = element(0, "HTML");
        assert!(find_first(&tree, |_| true).is_none());
        assert!(find_all(&tree, |_| true).is_empty());
    }

    #[test]
    fn test_remove_duplicate_identity_at_one_level() {
        let mut root = element(0, "HTML");
        root.children.push(element(1, "A"));
        root.children.push(element(2, "B"));
        root.children.push(element(2, "C"));

        remove_from_tree(&mut root, 2);

        let ids: Vec<_> = root.children.iter().map(|n| n.backend_node_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_remove_at_every_depth() {
        let mut root = element(0, "HTML");
        let mut div = element(1, "DIV");
        div.children.push(element(7, "SPAN"));
        root.children.push(div);
        root.children.push(element(7, "SPAN"));

        remove_from_tree(&mut root, 7);

        assert!(find_first(&root, |n| n.backend_node_id == 7).is_none());
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_remove_absent_identity_is_noop() {
        let mut tree = sample_tree();
        remove_from_tree(&mut tree, 99);

        let all: Vec<_> = find_all(&tree, |_| true)
            .iter()
            .map(|n| n.backend_node_id)
            .collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_remove_on_empty_tree() {
        let mut tree = element(0, "HTML");
        remove_from_tree(&mut tree, 1);
        assert!(tree.children.is_empty());
    }
}
