//! Internal storage entries for [`Graph`](super::Graph).

use super::{EdgeId, EdgeKey, NodeId, Parent};

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeEntry<N> {
    pub(in crate::graph) name: String,
    pub(in crate::graph) label: N,
    pub(in crate::graph) parent: Parent,
    pub(in crate::graph) children: Vec<NodeId>,
    pub(in crate::graph) out_edges: Vec<EdgeId>,
    pub(in crate::graph) in_edges: Vec<EdgeId>,
}

impl<N> NodeEntry<N> {
    pub(in crate::graph) fn new(name: String, label: N) -> Self {
        Self {
            name,
            label,
            parent: Parent::Root,
            children: Vec::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) key: EdgeKey,
    pub(in crate::graph) label: E,
}
