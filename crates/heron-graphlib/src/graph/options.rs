//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Allow several edges between the same ordered pair of nodes, told apart by name.
    pub multigraph: bool,
    /// Enable the containment hierarchy (`set_parent`).
    pub compound: bool,
}
