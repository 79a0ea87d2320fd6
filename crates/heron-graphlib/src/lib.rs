//! Compound graph container used by `heron`.
//!
//! Nodes and edges live in arenas and are addressed through [`NodeId`] / [`EdgeId`] handles.
//! Every node additionally sits in a containment tree whose top is the implicit
//! [`Parent::Root`]. Handles stay valid across insertions, so passes may add nodes while they
//! walk the hierarchy.

mod graph;

pub use graph::alg;
pub use graph::{EdgeId, EdgeKey, Graph, GraphError, GraphOptions, NodeId, Parent, Result};
