//! Per-element style state
//!
//! The registry keeps a side-table from element identifier to the rule
//! entries of that element's pseudo-elements.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use pseudo_dom::ElementRef;

use crate::{PropertyMap, RuleIndexAllocator};

/// Where a rule's selector fragment comes from
#[derive(Clone)]
pub enum SelectorSource {
    /// Used verbatim
    Literal(String),
    /// Evaluated against the element at render time
    Computed(Rc<dyn Fn(ElementRef<'_>) -> String>),
}

impl SelectorSource {
    pub fn literal(selector: impl Into<String>) -> Self {
        Self::Literal(selector.into())
    }

    pub fn computed(f: impl Fn(ElementRef<'_>) -> String + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }

    /// `#<element id>`
    pub fn element_id() -> Self {
        Self::computed(|element| format!("#{}", element.id()))
    }

    /// Produce the selector fragment for `element`
    pub fn resolve(&self, element: ElementRef<'_>) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Computed(f) => f(element),
        }
    }
}

impl Default for SelectorSource {
    fn default() -> Self {
        Self::element_id()
    }
}

impl fmt::Debug for SelectorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for SelectorSource {
    fn from(s: &str) -> Self {
        Self::literal(s)
    }
}

impl From<String> for SelectorSource {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

/// One (element, pseudo-element) pair and its slot in the managed sheet
#[derive(Debug, Clone)]
pub struct RuleEntry {
    index: usize,
    pub properties: PropertyMap,
    pub selector: SelectorSource,
    pub use_important: bool,
}

impl RuleEntry {
    fn new(index: usize, use_important: bool) -> Self {
        Self {
            index,
            properties: PropertyMap::new(),
            selector: SelectorSource::default(),
            use_important,
        }
    }

    /// Slot in the managed stylesheet; fixed for the entry's lifetime
    pub fn index(&self) -> usize {
        self.index
    }

    /// Snapshot of everything except the properties
    pub fn options(&self) -> RuleOptions {
        RuleOptions {
            index: self.index,
            selector: self.selector.clone(),
            use_important: self.use_important,
        }
    }
}

/// Non-property fields of a [`RuleEntry`]
#[derive(Debug, Clone)]
pub struct RuleOptions {
    pub index: usize,
    pub selector: SelectorSource,
    pub use_important: bool,
}

/// Partial update for a pseudo-element's options.
///
/// `None` fields leave the entry unchanged; `properties` is merged.
#[derive(Debug, Clone, Default)]
pub struct PseudoElementOptions {
    pub selector: Option<SelectorSource>,
    pub use_important: Option<bool>,
    pub properties: Option<PropertyMap>,
}

impl PseudoElementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(mut self, selector: impl Into<SelectorSource>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn use_important(mut self, use_important: bool) -> Self {
        self.use_important = Some(use_important);
        self
    }

    pub fn properties(mut self, properties: impl Into<PropertyMap>) -> Self {
        self.properties = Some(properties.into());
        self
    }
}

/// Everything the registry knows about one element
#[derive(Debug, Clone, Default)]
pub struct ElementStyleState {
    pub initialized: bool,
    pub pseudo_elements: HashMap<String, RuleEntry>,
}

/// Side-table: element identifier -> style state
#[derive(Debug)]
pub struct StyleStateTable {
    elements: HashMap<String, ElementStyleState>,
    default_use_important: bool,
}

impl StyleStateTable {
    pub fn new(default_use_important: bool) -> Self {
        Self {
            elements: HashMap::new(),
            default_use_important,
        }
    }

    pub fn ensure_element(&mut self, key: &str) -> &mut ElementStyleState {
        let state = self.elements.entry(key.to_string()).or_default();
        state.initialized = true;
        state
    }

    /// Create the entry on first reference; an existing index is never touched
    pub fn ensure_pseudo_element(
        &mut self,
        key: &str,
        name: &str,
        allocator: &mut RuleIndexAllocator,
    ) -> &mut RuleEntry {
        let use_important = self.default_use_important;
        self.ensure_element(key)
            .pseudo_elements
            .entry(name.to_string())
            .or_insert_with(|| RuleEntry::new(allocator.next_index(), use_important))
    }

    pub fn element(&self, key: &str) -> Option<&ElementStyleState> {
        self.elements.get(key)
    }

    pub fn get_entry(&self, key: &str, name: &str) -> Option<&RuleEntry> {
        self.elements.get(key)?.pseudo_elements.get(name)
    }

    /// Apply an options patch
    pub fn configure(
        &mut self,
        key: &str,
        name: &str,
        patch: PseudoElementOptions,
        allocator: &mut RuleIndexAllocator,
    ) -> &RuleEntry {
        let entry = self.ensure_pseudo_element(key, name, allocator);
        if let Some(selector) = patch.selector {
            entry.selector = selector;
        }
        if let Some(use_important) = patch.use_important {
            entry.use_important = use_important;
        }
        if let Some(properties) = patch.properties {
            entry.properties.merge(properties);
        }
        entry
    }

    /// Merge properties into the entry, keeping falsy values as present
    pub fn merge_properties(
        &mut self,
        key: &str,
        name: &str,
        properties: PropertyMap,
        allocator: &mut RuleIndexAllocator,
    ) -> &RuleEntry {
        let entry = self.ensure_pseudo_element(key, name, allocator);
        entry.properties.merge(properties);
        entry
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
