//! Errors surfaced to callers.
//!
//! Almost everything in this crate degrades gracefully; the only failure a
//! caller sees is asking for a trap over a container that is not in the tree.

use crate::dom::node::NodeId;

/// Errors from trap activation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrapError {
    /// The container id is stale or belongs to another DOM.
    #[error("trap container {0:?} does not exist")]
    ContainerNotFound(NodeId),
    /// The container exists but is not connected to the document root.
    #[error("trap container {0:?} is not attached to the document")]
    ContainerDetached(NodeId),
}
