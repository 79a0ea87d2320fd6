//! Node, edge and graph labels.
//!
//! Labels are plain `Clone` data with `serde` support so pipelines can load graphs and
//! settings from JSON. Missing fields fall back to `Default`.

use crate::graphlib::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marks nodes that exist only to steer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dummy {
    Border,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub dummy: Option<Dummy>,
    /// Containment edges between the implicit root and this cluster. Clusters only.
    pub tree_depth: Option<usize>,
    pub border_top: Option<NodeId>,
    pub border_bottom: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeLabel {
    /// Minimum number of ranks between the endpoints.
    pub minlen: usize,
    pub weight: f64,
    /// Scaffolding inserted by [`crate::nesting_graph::run`].
    pub nesting_edge: bool,
    /// Caller payload carried through untouched.
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            nesting_edge: false,
            extras: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NestingConfig {
    pub border_top_prefix: String,
    pub border_bottom_prefix: String,
}

impl Default for NestingConfig {
    fn default() -> Self {
        Self {
            border_top_prefix: "_bt".to_string(),
            border_bottom_prefix: "_bb".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphLabel {
    pub nesting: NestingConfig,
    /// `minlen` multiplier applied by the last nesting pass. Real nodes end up on ranks that
    /// are multiples of this factor apart.
    pub node_rank_factor: Option<usize>,
}
