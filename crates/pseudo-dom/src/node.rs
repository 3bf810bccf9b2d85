//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the tree's arena
//! instead of pointers.

use crate::{InternedString, NamedNodeMap, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: InternedString) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name
    pub tag: InternedString,
    /// Attributes
    pub attrs: NamedNodeMap,
}

impl ElementData {
    pub fn new(tag: InternedString) -> Self {
        Self {
            tag,
            attrs: NamedNodeMap::new(),
        }
    }

    /// The `id` attribute, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").filter(|id| !id.is_empty())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) -> Option<String> {
        self.attrs.set(name, value)
    }
}
