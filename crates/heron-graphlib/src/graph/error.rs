use super::NodeId;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("graph is not compound; containment is unavailable")]
    NotCompound,

    #[error("unknown node handle {0:?}")]
    UnknownNode(NodeId),

    #[error("cannot place `{child}` under `{parent}`: containment would become cyclic")]
    Cycle { child: String, parent: String },
}
