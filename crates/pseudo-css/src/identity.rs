//! Identity assignment
//!
//! Styled elements are addressed by their `id`. Elements without one get
//! a generated `<prefix><n>` id that no other element in the document uses.

use pseudo_dom::{Document, NodeId};

use crate::Result;

#[derive(Debug)]
pub struct IdentityAssigner {
    prefix: String,
    counter: u64,
}

impl IdentityAssigner {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Return the element's id, generating and assigning one if absent
    pub fn ensure_identity(&mut self, doc: &mut Document, element: NodeId) -> Result<String> {
        let existing = doc.element(element)?.id().to_string();
        if !existing.is_empty() {
            return Ok(existing);
        }

        let id = loop {
            let candidate = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;
            if doc.get_element_by_id(&candidate).is_none() {
                break candidate;
            }
        };

        doc.set_attribute(element, "id", &id)?;
        tracing::debug!("Assigned id {} to {:?}", id, element);
        Ok(id)
    }
}
