//! The `Graph` container.
//!
//! Nodes carry a unique string name next to their handle so callers (and tests) can address
//! them the way layout inputs do. Removal leaves a tombstone in the arena; live handles are
//! never invalidated by unrelated mutation.

pub mod alg;
mod entries;
mod error;
mod ids;
mod options;

pub use error::{GraphError, Result};
pub use ids::{EdgeId, EdgeKey, NodeId, Parent};
pub use options::GraphOptions;

use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

pub struct Graph<N, E, G> {
    options: GraphOptions,
    graph_label: G,

    nodes: Vec<Option<NodeEntry<N>>>,
    node_index: HashMap<String, NodeId>,
    node_count: usize,

    edges: Vec<Option<EdgeEntry<E>>>,
    edge_index: HashMap<EdgeKey, EdgeId>,
    edge_count: usize,

    // Children of the implicit root, in insertion order.
    root_children: Vec<NodeId>,
    // Next numeric suffix per prefix for `add_unique_node`.
    next_suffix: HashMap<String, usize>,
}

impl<N, E, G> Graph<N, E, G>
where
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            node_count: 0,
            edges: Vec::new(),
            edge_index: HashMap::default(),
            edge_count: 0,
            root_children: Vec::new(),
            next_suffix: HashMap::default(),
        }
    }
}

impl<N, E, G> Graph<N, E, G> {
    fn entry(&self, v: NodeId) -> Option<&NodeEntry<N>> {
        self.nodes.get(v.0).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, v: NodeId) -> Option<&mut NodeEntry<N>> {
        self.nodes.get_mut(v.0).and_then(Option::as_mut)
    }

    fn edge_entry(&self, e: EdgeId) -> Option<&EdgeEntry<E>> {
        self.edges.get(e.0).and_then(Option::as_ref)
    }

    fn canonicalize_name(&self, name: Option<&str>) -> Option<String> {
        if self.options.multigraph {
            name.map(str::to_string)
        } else {
            None
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    // ---- nodes -------------------------------------------------------------------------

    pub fn has_node(&self, v: NodeId) -> bool {
        self.entry(v).is_some()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.node_index.get(name).copied()
    }

    pub fn name(&self, v: NodeId) -> Option<&str> {
        self.entry(v).map(|n| n.name.as_str())
    }

    /// Inserts a node under the implicit root, or replaces the label of the node that already
    /// carries `name`. Returns the node's handle either way.
    pub fn set_node(&mut self, name: impl Into<String>, label: N) -> NodeId {
        let name = name.into();
        if let Some(&v) = self.node_index.get(&name) {
            if let Some(n) = self.entry_mut(v) {
                n.label = label;
            }
            return v;
        }
        let v = NodeId(self.nodes.len());
        self.nodes.push(Some(NodeEntry::new(name.clone(), label)));
        self.node_index.insert(name, v);
        self.node_count += 1;
        self.root_children.push(v);
        v
    }

    /// Inserts a node whose name is derived from `prefix`: `prefix`, then `prefix1`,
    /// `prefix2`, ... skipping names already taken.
    pub fn add_unique_node(&mut self, prefix: &str, label: N) -> NodeId {
        let mut next = match self.next_suffix.get(prefix).copied() {
            Some(next) => next,
            None => {
                self.next_suffix.insert(prefix.to_string(), 1);
                if !self.node_index.contains_key(prefix) {
                    return self.set_node(prefix, label);
                }
                1
            }
        };
        loop {
            let name = format!("{prefix}{next}");
            next += 1;
            if !self.node_index.contains_key(&name) {
                self.next_suffix.insert(prefix.to_string(), next);
                return self.set_node(name, label);
            }
        }
    }

    pub fn node(&self, v: NodeId) -> Option<&N> {
        self.entry(v).map(|n| &n.label)
    }

    pub fn node_mut(&mut self, v: NodeId) -> Option<&mut N> {
        self.entry_mut(v).map(|n| &mut n.label)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Live node handles in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(ix, _)| NodeId(ix))
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().collect()
    }

    /// Removes `v` with all incident edges. Children of `v` move up to the implicit root.
    pub fn remove_node(&mut self, v: NodeId) -> bool {
        let Some(slot) = self.nodes.get_mut(v.0) else {
            return false;
        };
        let Some(entry) = slot.take() else {
            return false;
        };
        self.node_count -= 1;
        self.node_index.remove(&entry.name);

        for e in entry.out_edges.iter().chain(entry.in_edges.iter()) {
            self.remove_edge(*e);
        }

        self.detach(v, entry.parent);
        for child in entry.children {
            if let Some(c) = self.entry_mut(child) {
                c.parent = Parent::Root;
            }
            self.root_children.push(child);
        }
        true
    }

    // ---- edges -------------------------------------------------------------------------

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Live edge handles in insertion order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(ix, _)| EdgeId(ix))
            .collect()
    }

    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(EdgeId, &EdgeKey, &E),
    {
        for (ix, slot) in self.edges.iter().enumerate() {
            if let Some(e) = slot {
                f(EdgeId(ix), &e.key, &e.label);
            }
        }
    }

    pub fn for_each_edge_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(EdgeId, &EdgeKey, &mut E),
    {
        for (ix, slot) in self.edges.iter_mut().enumerate() {
            if let Some(e) = slot {
                f(EdgeId(ix), &e.key, &mut e.label);
            }
        }
    }

    pub fn set_edge(&mut self, v: NodeId, w: NodeId, label: E) -> Result<EdgeId> {
        self.set_edge_named(v, w, None, label)
    }

    /// Inserts an edge, or replaces the label of the edge with the same key. `name` is
    /// ignored unless the graph is a multigraph.
    pub fn set_edge_named(
        &mut self,
        v: NodeId,
        w: NodeId,
        name: Option<&str>,
        label: E,
    ) -> Result<EdgeId> {
        for end in [v, w] {
            if !self.has_node(end) {
                return Err(GraphError::UnknownNode(end));
            }
        }
        let key = EdgeKey {
            v,
            w,
            name: self.canonicalize_name(name),
        };
        Ok(self.upsert_edge(key, label))
    }

    fn upsert_edge(&mut self, key: EdgeKey, label: E) -> EdgeId {
        if let Some(&e) = self.edge_index.get(&key) {
            if let Some(Some(entry)) = self.edges.get_mut(e.0) {
                entry.label = label;
            }
            return e;
        }

        let (v, w) = (key.v, key.w);
        let e = EdgeId(self.edges.len());
        self.edges.push(Some(EdgeEntry {
            key: key.clone(),
            label,
        }));
        self.edge_index.insert(key, e);
        self.edge_count += 1;
        if let Some(n) = self.entry_mut(v) {
            n.out_edges.push(e);
        }
        if let Some(n) = self.entry_mut(w) {
            n.in_edges.push(e);
        }
        e
    }

    pub fn edge(&self, e: EdgeId) -> Option<&E> {
        self.edge_entry(e).map(|entry| &entry.label)
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Option<&mut E> {
        self.edges
            .get_mut(e.0)
            .and_then(Option::as_mut)
            .map(|entry| &mut entry.label)
    }

    pub fn endpoints(&self, e: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edge_entry(e).map(|entry| (entry.key.v, entry.key.w))
    }

    pub fn find_edge(&self, v: NodeId, w: NodeId, name: Option<&str>) -> Option<EdgeId> {
        let key = EdgeKey {
            v,
            w,
            name: self.canonicalize_name(name),
        };
        self.edge_index.get(&key).copied()
    }

    pub fn has_edge(&self, v: NodeId, w: NodeId, name: Option<&str>) -> bool {
        self.find_edge(v, w, name).is_some()
    }

    pub fn remove_edge(&mut self, e: EdgeId) -> bool {
        let Some(slot) = self.edges.get_mut(e.0) else {
            return false;
        };
        let Some(entry) = slot.take() else {
            return false;
        };
        self.edge_count -= 1;
        self.edge_index.remove(&entry.key);
        if let Some(n) = self.entry_mut(entry.key.v) {
            n.out_edges.retain(|x| *x != e);
        }
        if let Some(n) = self.entry_mut(entry.key.w) {
            n.in_edges.retain(|x| *x != e);
        }
        true
    }

    pub fn out_edges(&self, v: NodeId) -> &[EdgeId] {
        self.entry(v).map(|n| n.out_edges.as_slice()).unwrap_or(&[])
    }

    pub fn in_edges(&self, v: NodeId) -> &[EdgeId] {
        self.entry(v).map(|n| n.in_edges.as_slice()).unwrap_or(&[])
    }

    pub fn successors(&self, v: NodeId) -> Vec<NodeId> {
        self.out_edges(v)
            .iter()
            .filter_map(|&e| self.endpoints(e))
            .map(|(_, w)| w)
            .collect()
    }

    // ---- hierarchy ---------------------------------------------------------------------

    fn detach(&mut self, child: NodeId, parent: Parent) {
        match parent {
            Parent::Root => self.root_children.retain(|c| *c != child),
            Parent::Node(p) => {
                if let Some(n) = self.entry_mut(p) {
                    n.children.retain(|c| *c != child);
                }
            }
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, v: NodeId) -> bool {
        let mut cur = Parent::Node(v);
        while let Parent::Node(u) = cur {
            if u == ancestor {
                return true;
            }
            cur = self.entry(u).map(|n| n.parent).unwrap_or(Parent::Root);
        }
        false
    }

    /// Moves `child` under `parent`. The containment relation stays a tree: placing a node
    /// below itself or one of its descendants is rejected.
    pub fn set_parent(&mut self, child: NodeId, parent: Parent) -> Result<()> {
        if !self.options.compound {
            return Err(GraphError::NotCompound);
        }
        let Some(prev) = self.entry(child).map(|n| n.parent) else {
            return Err(GraphError::UnknownNode(child));
        };
        if let Parent::Node(p) = parent {
            if !self.has_node(p) {
                return Err(GraphError::UnknownNode(p));
            }
            if self.is_ancestor_or_self(child, p) {
                return Err(GraphError::Cycle {
                    child: self.name(child).unwrap_or_default().to_string(),
                    parent: self.name(p).unwrap_or_default().to_string(),
                });
            }
        }
        if prev == parent {
            return Ok(());
        }

        self.detach(child, prev);
        match parent {
            Parent::Root => self.root_children.push(child),
            Parent::Node(p) => {
                if let Some(n) = self.entry_mut(p) {
                    n.children.push(child);
                }
            }
        }
        if let Some(n) = self.entry_mut(child) {
            n.parent = parent;
        }
        Ok(())
    }

    /// Parent of `v`; `Parent::Root` for top-level (and unknown) nodes.
    pub fn parent(&self, v: NodeId) -> Parent {
        self.entry(v).map(|n| n.parent).unwrap_or(Parent::Root)
    }

    /// Direct children in insertion order. For `Parent::Root` these are all top-level nodes.
    pub fn children(&self, parent: Parent) -> &[NodeId] {
        match parent {
            Parent::Root => &self.root_children,
            Parent::Node(p) => self.entry(p).map(|n| n.children.as_slice()).unwrap_or(&[]),
        }
    }

    pub fn has_children(&self, parent: Parent) -> bool {
        !self.children(parent).is_empty()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    E: Default,
{
    /// Returns the node named `name`, inserting it with a default label when absent.
    pub fn ensure_node(&mut self, name: &str) -> NodeId {
        match self.node_id(name) {
            Some(v) => v,
            None => self.set_node(name, N::default()),
        }
    }

    /// Name-based convenience for building inputs: creates missing endpoints and the edge.
    pub fn connect(&mut self, v: &str, w: &str, label: E) -> EdgeId {
        let v = self.ensure_node(v);
        let w = self.ensure_node(w);
        self.upsert_edge(EdgeKey { v, w, name: None }, label)
    }

    /// Name-based convenience for building inputs: `child` is placed inside `parent`,
    /// creating both as needed.
    pub fn nest(&mut self, child: &str, parent: &str) -> Result<()> {
        let child = self.ensure_node(child);
        let parent = self.ensure_node(parent);
        self.set_parent(child, Parent::Node(parent))
    }
}
