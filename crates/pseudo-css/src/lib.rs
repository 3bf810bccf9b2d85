//! pseudo-css - Pseudo-Element Style Registry
//!
//! Inline styles cannot reach `::before`, `::after` and friends, so this
//! crate keeps one managed stylesheet and writes a rule per
//! (element, pseudo-element) pair into it. Every pair gets a fixed slot
//! in the rule list the first time it is seen; later changes rewrite that
//! slot in place.
//!
//! # Example
//! ```rust,ignore
//! use pseudo_css::{PropertyMap, RegistryConfig, RegistryContext};
//! use pseudo_dom::Document;
//!
//! let mut doc = Document::default();
//! let badge = doc.append_element(doc.body(), "span")?;
//! let mut registry = RegistryContext::attach(&mut doc, RegistryConfig::default())?;
//!
//! registry.set_pseudo_element_css(
//!     &mut doc,
//!     [badge],
//!     "::before",
//!     PropertyMap::new().with("content", "'*'").with("color", "red"),
//! )?;
//! ```

mod allocator;
pub mod case;
mod config;
mod identity;
mod registry;
mod state;
pub mod sync;
mod value;

pub use allocator::RuleIndexAllocator;
pub use config::RegistryConfig;
pub use identity::IdentityAssigner;
pub use registry::RegistryContext;
pub use state::{
    ElementStyleState, PseudoElementOptions, RuleEntry, RuleOptions, SelectorSource,
    StyleStateTable,
};
pub use sync::WriteOutcome;
pub use value::{PropertyMap, PropertyValue};

pub use pseudo_cssom::{CssRule, CssStyleSheet, SheetCapabilities};

use pseudo_dom::NodeId;

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum PseudoCssError {
    #[error(transparent)]
    Dom(#[from] pseudo_dom::DomError),

    #[error("Stylesheet rejected rule: {0}")]
    Sheet(#[from] pseudo_cssom::CssomError),

    #[error("No rule entry for {pseudo_element} on node {element:?}")]
    MissingEntry {
        element: NodeId,
        pseudo_element: String,
    },
}

pub type Result<T> = std::result::Result<T, PseudoCssError>;
