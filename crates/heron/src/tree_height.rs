use crate::LayoutGraph;
use crate::graphlib::Parent;

/// Height of the containment tree, counted in containment edges from the implicit root down
/// to the deepest leaf.
///
/// Every cluster is annotated with its own depth in `tree_depth` along the way (top-level
/// clusters get `1`). An empty graph has height `0`, a graph of top-level leaves height `1`.
pub fn tree_height(g: &mut LayoutGraph) -> usize {
    let mut height = 0;
    let mut stack: Vec<(Parent, usize)> = vec![(Parent::Root, 0)];
    while let Some((v, depth)) = stack.pop() {
        let children = g.children(v);
        if children.is_empty() {
            height = height.max(depth);
            continue;
        }
        stack.extend(children.iter().map(|&c| (Parent::Node(c), depth + 1)));
        if let Parent::Node(v) = v {
            if let Some(label) = g.node_mut(v) {
                label.tree_depth = Some(depth);
            }
        }
    }
    height
}
