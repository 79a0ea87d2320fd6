//! Traversals over the containment hierarchy.
//!
//! Both walks use an explicit stack, so arbitrarily deep nesting cannot exhaust the call
//! stack. Siblings are visited in insertion order.

use super::{Graph, NodeId, Parent};

/// Descendants of `start` (excluding `start` itself), parents before children.
pub fn hierarchy_preorder<N, E, G>(g: &Graph<N, E, G>, start: Parent) -> Vec<NodeId> {
    let mut out: Vec<NodeId> = Vec::new();
    let mut stack: Vec<NodeId> = g.children(start).iter().rev().copied().collect();
    while let Some(v) = stack.pop() {
        out.push(v);
        stack.extend(g.children(Parent::Node(v)).iter().rev());
    }
    out
}

/// Descendants of `start` (excluding `start` itself), children before parents.
pub fn hierarchy_postorder<N, E, G>(g: &Graph<N, E, G>, start: Parent) -> Vec<NodeId> {
    let mut out: Vec<NodeId> = Vec::new();
    let mut stack: Vec<(NodeId, bool)> = g
        .children(start)
        .iter()
        .rev()
        .map(|&v| (v, false))
        .collect();
    while let Some((v, expanded)) = stack.pop() {
        if expanded {
            out.push(v);
            continue;
        }
        stack.push((v, true));
        stack.extend(g.children(Parent::Node(v)).iter().rev().map(|&c| (c, false)));
    }
    out
}

/// Like [`hierarchy_postorder`], paired with each node's depth below `start` (direct children
/// of `start` are at depth 1).
pub fn hierarchy_postorder_with_depth<N, E, G>(
    g: &Graph<N, E, G>,
    start: Parent,
) -> Vec<(NodeId, usize)> {
    let mut out: Vec<(NodeId, usize)> = Vec::new();
    let mut stack: Vec<(NodeId, usize, bool)> = g
        .children(start)
        .iter()
        .rev()
        .map(|&v| (v, 1, false))
        .collect();
    while let Some((v, depth, expanded)) = stack.pop() {
        if expanded {
            out.push((v, depth));
            continue;
        }
        stack.push((v, depth, true));
        stack.extend(
            g.children(Parent::Node(v))
                .iter()
                .rev()
                .map(|&c| (c, depth + 1, false)),
        );
    }
    out
}
