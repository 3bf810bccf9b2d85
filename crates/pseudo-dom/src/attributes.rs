//! Element Attributes
//!
//! Attribute storage with insertion order preserved and O(1) name lookup.

use std::collections::HashMap;

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_id(&self) -> bool {
        self.name == "id"
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.attributes.get(i))
            .map(|a| a.value.as_str())
    }

    /// Set attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(&index) = self.by_name.get(name) {
            Some(std::mem::replace(&mut self.attributes[index].value, value.to_string()))
        } else {
            self.by_name.insert(name.to_string(), self.attributes.len());
            self.attributes.push(Attr::new(name, value));
            None
        }
    }

    /// Remove attribute by name
    pub fn remove(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}
