//! Nesting-graph transform for layered layout of compound graphs.
//!
//! A flat ranker knows nothing about clusters. [`nesting_graph::run`] rewrites a compound
//! graph so that ranking it keeps every cluster's members between a top and a bottom border
//! node, and [`nesting_graph::cleanup`] strips the scaffolding edges once ranks are known.

pub use heron_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod model;
pub mod nesting_graph;
mod tree_height;

pub use model::{Dummy, EdgeLabel, GraphLabel, NestingConfig, NodeLabel};
pub use tree_height::tree_height;

/// The graph type every pass in this crate operates on.
pub type LayoutGraph = graphlib::Graph<NodeLabel, EdgeLabel, GraphLabel>;
