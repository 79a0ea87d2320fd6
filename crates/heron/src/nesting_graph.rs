//! Nesting graph construction for compound graphs.
//!
//! [`run`] reserves rank space for cluster borders: every edge is stretched by the same
//! factor, each cluster gets a top and a bottom border node, and every direct child of the
//! cluster is tied between the two with nesting edges. Border nodes live at the top level of
//! the hierarchy, never inside their cluster, so they are not themselves treated as cluster
//! members.
//!
//! [`cleanup`] drops the nesting edges after ranking. It deliberately keeps the stretched
//! `minlen` values, the border nodes and the cluster annotations; call
//! [`remove_border_nodes`] to get rid of the border nodes as well.

use crate::graphlib::{EdgeId, NodeId, Parent, alg};
use crate::{Dummy, EdgeLabel, LayoutGraph, NodeLabel, tree_height};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

fn add_border_node(g: &mut LayoutGraph, prefix: &str) -> NodeId {
    g.add_unique_node(
        prefix,
        NodeLabel {
            width: 0.0,
            height: 0.0,
            dummy: Some(Dummy::Border),
            ..Default::default()
        },
    )
}

fn sum_weights(g: &LayoutGraph) -> f64 {
    let mut out: f64 = 0.0;
    g.for_each_edge(|_, _, e| out += e.weight);
    out
}

/// `depth` is the containment depth of `v` below the implicit root.
fn add_borders(g: &mut LayoutGraph, v: NodeId, depth: usize, height: usize, weight: f64) {
    let (top_prefix, bottom_prefix) = {
        let config = &g.graph().nesting;
        (
            config.border_top_prefix.clone(),
            config.border_bottom_prefix.clone(),
        )
    };
    let top = add_border_node(g, &top_prefix);
    let bottom = add_border_node(g, &bottom_prefix);
    if let Some(label) = g.node_mut(v) {
        label.border_top = Some(top);
        label.border_bottom = Some(bottom);
    }

    let children = g.children(Parent::Node(v)).to_vec();
    for child in children {
        // A nested cluster is bounded by its own borders, so one rank of slack is enough.
        // A leaf must be able to sit anywhere down to the bottom of the deepest cluster.
        let (minlen, this_weight) = if g.has_children(Parent::Node(child)) {
            (1, weight)
        } else {
            (height.saturating_sub(depth) + 1, 2.0 * weight)
        };
        let label = EdgeLabel {
            minlen,
            weight: this_weight,
            nesting_edge: true,
            ..Default::default()
        };
        for (from, to) in [(top, child), (child, bottom)] {
            if let Err(err) = g.set_edge(from, to, label.clone()) {
                debug!(%err, "skipping nesting edge");
            }
        }
    }

    trace!(cluster = g.name(v).unwrap_or_default(), depth, "added cluster borders");
}

/// Adds border nodes and nesting edges for every cluster.
///
/// Not idempotent: a second call stretches `minlen` again and adds a second border pair per
/// cluster.
pub fn run(g: &mut LayoutGraph) {
    // An empty graph has height 0; clamping keeps the factor at 1 instead of going negative.
    let height = tree_height(g).saturating_sub(1);
    let node_sep = 2 * height + 1;

    // Saturate rather than wrap: an absurdly long edge stays absurdly long.
    g.for_each_edge_mut(|_, _, e| e.minlen = e.minlen.saturating_mul(node_sep));
    let weight = sum_weights(g) + 1.0;

    // Children first: a cluster's border pair is created only after all of its descendants
    // have theirs.
    let clusters: Vec<(NodeId, usize)> = alg::hierarchy_postorder_with_depth(&*g, Parent::Root)
        .into_iter()
        .filter(|&(v, _)| g.has_children(Parent::Node(v)))
        .collect();
    for &(v, depth) in &clusters {
        add_borders(g, v, depth, height, weight);
    }

    g.graph_mut().node_rank_factor = Some(node_sep);
    debug!(
        height,
        node_sep,
        clusters = clusters.len(),
        "nesting graph added"
    );
}

/// Removes every edge flagged as a nesting edge. Running it twice is the same as once.
pub fn cleanup(g: &mut LayoutGraph) {
    let mut to_remove: Vec<EdgeId> = Vec::new();
    g.for_each_edge(|e, _, label| {
        if label.nesting_edge {
            to_remove.push(e);
        }
    });
    for &e in &to_remove {
        g.remove_edge(e);
    }
    debug!(removed = to_remove.len(), "nesting edges removed");
}

/// Removes the border nodes left behind by [`run`] together with any edges still attached
/// to them, and clears the clusters' `border_top` / `border_bottom` handles. Returns the
/// number of removed nodes.
pub fn remove_border_nodes(g: &mut LayoutGraph) -> usize {
    let borders: FxHashSet<NodeId> = g
        .nodes()
        .filter(|&v| g.node(v).is_some_and(|n| n.dummy == Some(Dummy::Border)))
        .collect();
    for &v in &borders {
        g.remove_node(v);
    }

    for v in g.node_ids() {
        let Some(label) = g.node_mut(v) else {
            continue;
        };
        if label.border_top.is_some_and(|b| borders.contains(&b)) {
            label.border_top = None;
        }
        if label.border_bottom.is_some_and(|b| borders.contains(&b)) {
            label.border_bottom = None;
        }
    }

    debug!(removed = borders.len(), "border nodes removed");
    borders.len()
}
