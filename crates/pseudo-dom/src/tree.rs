//! DOM Tree (arena-based allocation)

use crate::{DomError, ElementData, InternedString, Node, NodeId, StringInterner};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node exists from construction
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve an interned string
    pub fn resolve(&self, s: InternedString) -> &str {
        self.interner.get(s)
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let tag = self.interner.intern(&tag.to_ascii_lowercase());
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.get(parent).is_none() {
            return Err(DomError::InvalidNode(parent));
        }
        if self.get(child).is_none() || child == NodeId::ROOT || child == parent {
            return Err(DomError::InvalidNode(child));
        }
        self.detach(child);

        let prev_last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev_last;
            node.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(())
    }

    /// Unlink a node from its parent and siblings
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate direct children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Borrow an element as a read-only view
    pub fn element(&self, id: NodeId) -> Result<ElementRef<'_>, DomError> {
        let node = self.get(id).ok_or(DomError::InvalidNode(id))?;
        let data = node.as_element().ok_or(DomError::NotAnElement(id))?;
        Ok(ElementRef { node: id, data, tree: self })
    }

    /// Borrow element data mutably
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        let node = self.get_mut(id).ok_or(DomError::InvalidNode(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Depth-first search for an element under `start` with the given `id`
    pub fn find_by_id(&self, start: NodeId, target: &str) -> Option<NodeId> {
        for (node_id, node) in self.children(start) {
            if node.as_element().and_then(ElementData::id) == Some(target) {
                return Some(node_id);
            }
            if let Some(found) = self.find_by_id(node_id, target) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Read-only view of an element, handed to selector callbacks
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    node: NodeId,
    data: &'a ElementData,
    tree: &'a DomTree,
}

impl<'a> ElementRef<'a> {
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// The `id` attribute (empty string when absent)
    pub fn id(&self) -> &'a str {
        self.data.id().unwrap_or("")
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.data.attr(name)
    }

    pub fn tag_name(&self) -> &'a str {
        self.tree.resolve(self.data.tag)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.tree
            .get(self.node)
            .map(|n| n.parent)
            .filter(|p| p.is_valid())
    }
}
