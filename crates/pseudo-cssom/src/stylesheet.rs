//! Indexed stylesheet
//!
//! `insert_rule` shifts every later rule one slot up, `delete_rule`
//! shifts them back. Inserting past the end is an index error, so callers
//! that want an arbitrary slot must fill the list first.

use crate::{CssRule, CssomError, RuleParser};
use pseudo_dom::NodeId;

/// Which index-based mutations the stylesheet exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetCapabilities {
    pub insert_rule: bool,
    pub delete_rule: bool,
}

impl SheetCapabilities {
    /// Both insert and delete available
    pub const FULL: Self = Self {
        insert_rule: true,
        delete_rule: true,
    };

    /// Read-only rule list
    pub const NONE: Self = Self {
        insert_rule: false,
        delete_rule: false,
    };
}

impl Default for SheetCapabilities {
    fn default() -> Self {
        Self::FULL
    }
}

/// A stylesheet owned by a `<style>` node
#[derive(Debug, Clone)]
pub struct CssStyleSheet {
    owner_node: NodeId,
    rules: Vec<CssRule>,
    capabilities: SheetCapabilities,
    parser: RuleParser,
}

impl CssStyleSheet {
    /// Create an empty sheet owned by `owner_node`
    pub fn new(owner_node: NodeId) -> Self {
        Self::with_capabilities(owner_node, SheetCapabilities::FULL)
    }

    pub fn with_capabilities(owner_node: NodeId, capabilities: SheetCapabilities) -> Self {
        Self {
            owner_node,
            rules: Vec::new(),
            capabilities,
            parser: RuleParser::new(),
        }
    }

    /// The `<style>` element this sheet belongs to
    pub fn owner_node(&self) -> NodeId {
        self.owner_node
    }

    pub fn capabilities(&self) -> SheetCapabilities {
        self.capabilities
    }

    /// Change capabilities, e.g. once an environment gains support
    pub fn set_capabilities(&mut self, capabilities: SheetCapabilities) {
        self.capabilities = capabilities;
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule list
    pub fn css_rules(&self) -> &[CssRule] {
        &self.rules
    }

    pub fn rule(&self, index: usize) -> Option<&CssRule> {
        self.rules.get(index)
    }

    /// Insert `rule` at `index`, returning the index
    pub fn insert_rule(&mut self, rule: &str, index: usize) -> Result<usize, CssomError> {
        if !self.capabilities.insert_rule {
            return Err(CssomError::NotSupported("insertRule"));
        }
        if index > self.rules.len() {
            return Err(CssomError::IndexSize {
                index,
                len: self.rules.len(),
            });
        }

        let parsed = self.parser.parse(rule)?;
        tracing::trace!("insertRule({}) at {}", parsed.css_text, index);
        self.rules.insert(index, parsed);
        Ok(index)
    }

    /// Remove the rule at `index`
    pub fn delete_rule(&mut self, index: usize) -> Result<CssRule, CssomError> {
        if !self.capabilities.delete_rule {
            return Err(CssomError::NotSupported("deleteRule"));
        }
        if index >= self.rules.len() {
            return Err(CssomError::IndexSize {
                index,
                len: self.rules.len(),
            });
        }

        tracing::trace!("deleteRule({})", index);
        Ok(self.rules.remove(index))
    }

    /// Serialize all rules, one per line
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|r| r.css_text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> CssStyleSheet {
        CssStyleSheet::new(NodeId::ROOT)
    }

    #[test]
    fn test_insert_shifts_later_rules() {
        let mut sheet = sheet();
        sheet.insert_rule("a{color:red}", 0).unwrap();
        sheet.insert_rule("b{color:blue}", 0).unwrap();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rule(0).unwrap().selector_text, "b");
        assert_eq!(sheet.rule(1).unwrap().selector_text, "a");
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut sheet = sheet();
        let err = sheet.insert_rule("a{color:red}", 1).unwrap_err();
        assert_eq!(err, CssomError::IndexSize { index: 1, len: 0 });
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_insert_at_end_appends() {
        let mut sheet = sheet();
        sheet.insert_rule("a{}", 0).unwrap();
        assert_eq!(sheet.insert_rule("b{}", 1), Ok(1));
        assert_eq!(sheet.to_css(), "a{}\nb{}");
    }

    #[test]
    fn test_delete_rule() {
        let mut sheet = sheet();
        sheet.insert_rule("a{}", 0).unwrap();
        sheet.insert_rule("b{}", 1).unwrap();

        let removed = sheet.delete_rule(0).unwrap();
        assert_eq!(removed.selector_text, "a");
        assert_eq!(sheet.len(), 1);
        assert!(sheet.delete_rule(1).is_err());
    }

    #[test]
    fn test_invalid_rule_leaves_list_untouched() {
        let mut sheet = sheet();
        sheet.insert_rule("a{}", 0).unwrap();
        assert!(sheet.insert_rule("!!! {color:red}", 0).is_err());
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_capabilities_gate_mutation() {
        let mut sheet = CssStyleSheet::with_capabilities(NodeId::ROOT, SheetCapabilities::NONE);
        assert_eq!(
            sheet.insert_rule("a{}", 0),
            Err(CssomError::NotSupported("insertRule"))
        );

        sheet.set_capabilities(SheetCapabilities {
            insert_rule: true,
            delete_rule: false,
        });
        sheet.insert_rule("a{}", 0).unwrap();
        assert!(matches!(sheet.delete_rule(0), Err(CssomError::NotSupported(_))));
    }
}
