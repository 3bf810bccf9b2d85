//! Document - High-level document API

use crate::{DomError, DomTree, ElementRef, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with `<html>`, `<head>` and `<body>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes cannot fail to link
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);
        tracing::trace!("Created document {}", url);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree.find_by_id(self.tree.root(), id)
    }

    /// Borrow an element view
    pub fn element(&self, id: NodeId) -> Result<ElementRef<'_>, DomError> {
        self.tree.element(id)
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.tree.element(id).ok()?.attr(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.tree.set_attribute(id, name, value)
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
