//! Registry context - the public configuration and mutation surface

use pseudo_cssom::CssStyleSheet;
use pseudo_dom::{Document, NodeId};

use crate::case::camel_case;
use crate::sync::{self, WriteOutcome};
use crate::{
    IdentityAssigner, PropertyMap, PropertyValue, PseudoCssError, PseudoElementOptions,
    RegistryConfig, Result, RuleEntry, RuleIndexAllocator, RuleOptions, StyleStateTable,
};

/// Owns the managed stylesheet, the counters and the per-element state
/// for one document.
#[derive(Debug)]
pub struct RegistryContext {
    config: RegistryConfig,
    style_element: NodeId,
    sheet: CssStyleSheet,
    identities: IdentityAssigner,
    allocator: RuleIndexAllocator,
    states: StyleStateTable,
}

impl RegistryContext {
    /// Append the managed `<style>` element to the document head
    pub fn attach(doc: &mut Document, config: RegistryConfig) -> Result<Self> {
        let style_element = doc.append_element(doc.head(), "style")?;
        tracing::info!("Attached managed stylesheet to {}", doc.url());

        Ok(Self {
            identities: IdentityAssigner::new(config.id_prefix.clone()),
            states: StyleStateTable::new(config.default_use_important),
            sheet: CssStyleSheet::new(style_element),
            allocator: RuleIndexAllocator::new(),
            style_element,
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The `<style>` node owning the managed sheet
    pub fn style_element(&self) -> NodeId {
        self.style_element
    }

    pub fn stylesheet(&self) -> &CssStyleSheet {
        &self.sheet
    }

    pub fn stylesheet_mut(&mut self) -> &mut CssStyleSheet {
        &mut self.sheet
    }

    pub fn states(&self) -> &StyleStateTable {
        &self.states
    }

    /// Number of rule slots handed out so far
    pub fn allocated_indices(&self) -> usize {
        self.allocator.allocated()
    }

    /// Element id, generated if the element has none
    pub fn ensure_identity(&mut self, doc: &mut Document, element: NodeId) -> Result<String> {
        self.identities.ensure_identity(doc, element)
    }

    /// Apply option patches per pseudo-element to every element.
    /// Nothing is written to the stylesheet.
    pub fn configure_pseudo_element<E, O, S>(
        &mut self,
        doc: &mut Document,
        elements: E,
        options: O,
    ) -> Result<()>
    where
        E: IntoIterator<Item = NodeId>,
        O: IntoIterator<Item = (S, PseudoElementOptions)>,
        S: Into<String>,
    {
        let options: Vec<(String, PseudoElementOptions)> = options
            .into_iter()
            .map(|(name, mut patch)| {
                patch.properties = patch.properties.map(PropertyMap::normalized);
                (name.into(), patch)
            })
            .collect();

        let mut first_error = None;
        for element in elements {
            let key = match self.identities.ensure_identity(doc, element) {
                Ok(key) => key,
                Err(err) => {
                    tracing::warn!("Skipping {:?}: {}", element, err);
                    first_error.get_or_insert(err);
                    continue;
                }
            };
            for (name, patch) in &options {
                self.states
                    .configure(&key, name, patch.clone(), &mut self.allocator);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Read the non-property options of a pseudo-element, creating its
    /// entry if needed
    pub fn pseudo_element_options(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        pseudo_element: &str,
    ) -> Result<RuleOptions> {
        self.pseudo_element_entry(doc, element, pseudo_element)
            .map(RuleEntry::options)
    }

    /// Full rule entry of a pseudo-element, creating it if needed
    pub fn pseudo_element_entry(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        pseudo_element: &str,
    ) -> Result<&RuleEntry> {
        let key = self.identities.ensure_identity(doc, element)?;
        Ok(self
            .states
            .ensure_pseudo_element(&key, pseudo_element, &mut self.allocator))
    }

    /// Merge `properties` into the pseudo-element of every element and
    /// rewrite their rules. Every element is processed; the first failure
    /// is returned afterwards.
    pub fn set_pseudo_element_css<E>(
        &mut self,
        doc: &mut Document,
        elements: E,
        pseudo_element: &str,
        properties: impl Into<PropertyMap>,
    ) -> Result<()>
    where
        E: IntoIterator<Item = NodeId>,
    {
        let properties = properties.into().normalized();
        let mut first_error = None;
        for element in elements {
            if let Err(err) = self.set_one(doc, element, pseudo_element, &properties) {
                tracing::warn!("Failed to style {:?}{}: {}", element, pseudo_element, err);
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn set_one(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        pseudo_element: &str,
        properties: &PropertyMap,
    ) -> Result<()> {
        let key = self.identities.ensure_identity(doc, element)?;
        self.states
            .merge_properties(&key, pseudo_element, properties.clone(), &mut self.allocator);
        self.write(doc, element, pseudo_element)?;
        Ok(())
    }

    /// Single-property form of [`RegistryContext::set_pseudo_element_css`]
    pub fn set_pseudo_element_property<E>(
        &mut self,
        doc: &mut Document,
        elements: E,
        pseudo_element: &str,
        property: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<()>
    where
        E: IntoIterator<Item = NodeId>,
    {
        let properties = PropertyMap::new().with(property, value);
        self.set_pseudo_element_css(doc, elements, pseudo_element, properties)
    }

    /// Tracked value of one property (either case form)
    pub fn pseudo_element_css(
        &self,
        doc: &Document,
        element: NodeId,
        pseudo_element: &str,
        property: &str,
    ) -> Option<&PropertyValue> {
        let key = doc.element(element).ok()?.id();
        self.states
            .get_entry(key, pseudo_element)?
            .properties
            .get(&camel_case(property))
    }

    /// Rule text currently stored in the pseudo-element's slot
    pub fn rule_text(&self, doc: &Document, element: NodeId, pseudo_element: &str) -> Option<&str> {
        let key = doc.element(element).ok()?.id();
        let index = self.states.get_entry(key, pseudo_element)?.index();
        self.sheet.rule(index).map(|r| r.css_text.as_str())
    }

    /// Re-render the pseudo-element's rule from its current state
    pub fn write(
        &mut self,
        doc: &Document,
        element: NodeId,
        pseudo_element: &str,
    ) -> Result<WriteOutcome> {
        let view = doc.element(element)?;
        let entry = self
            .states
            .get_entry(view.id(), pseudo_element)
            .ok_or_else(|| PseudoCssError::MissingEntry {
                element,
                pseudo_element: pseudo_element.to_string(),
            })?;

        sync::write(
            &mut self.sheet,
            &self.config.placeholder_rule,
            view,
            pseudo_element,
            entry,
        )
    }
}
