//! Arena handles.

/// Handle of a node slot. Handles are never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(in crate::graph) usize);

/// Handle of an edge slot. Handles are never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub(in crate::graph) usize);

/// Position in the containment hierarchy.
///
/// `Root` is the implicit top of the tree: it has no label, cannot be removed and is the
/// parent of every node that was never given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent {
    #[default]
    Root,
    Node(NodeId),
}

/// Identity of an edge: ordered endpoints plus an optional name (multigraphs only).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: NodeId,
    pub w: NodeId,
    pub name: Option<String>,
}
