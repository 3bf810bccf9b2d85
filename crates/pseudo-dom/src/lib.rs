//! pseudo-dom - Document Object Model
//!
//! Arena-backed DOM used as the host for pseudo-element styling.
//! Elements carry an attribute map with a cached `id`.

mod attributes;
mod document;
mod interner;
mod node;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use interner::{InternedString, StringInterner};
pub use node::{ElementData, Node, NodeData};
pub use tree::{Children, DomTree, ElementRef};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this ID points at something
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node {0:?} does not exist")]
    InvalidNode(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),
}
