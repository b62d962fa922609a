//! DOM arena: slotmap-backed widget tree with id and selector queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::Dom;
