//! pseudo-cssom - CSS Object Model rule lists
//!
//! A stylesheet whose rules are addressed by index, with the
//! `insertRule` / `deleteRule` semantics scripts expect. Rule text is
//! validated with lightningcss before it enters the list.

mod parser;
mod stylesheet;

pub use parser::RuleParser;
pub use stylesheet::{CssStyleSheet, SheetCapabilities};

/// Parse a single style rule such as `#a::before{color:red}`
pub fn parse_rule(css: &str) -> Result<CssRule, CssomError> {
    RuleParser::new().parse(css)
}

/// A style rule held by a [`CssStyleSheet`]
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    /// Selector text as written
    pub selector_text: String,
    /// Full rule text as inserted (trimmed)
    pub css_text: String,
    /// Declarations in source order, normal before important
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    /// Find a declaration by dash-case property name
    pub fn declaration(&self, property: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.property == property)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

/// CSSOM errors, mirroring the DOMExceptions browsers raise
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssomError {
    #[error("Index {index} is out of bounds for a rule list of length {len}")]
    IndexSize { index: usize, len: usize },

    #[error("Failed to parse rule '{rule}': {message}")]
    Syntax { rule: String, message: String },

    #[error("{0} is not supported by this stylesheet")]
    NotSupported(&'static str),
}
