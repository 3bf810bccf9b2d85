//! Rule parser using lightningcss
//!
//! Validates rule text handed to `insertRule` and extracts its
//! declarations. Invalid declarations are dropped the way a browser drops
//! them; only a rule whose selector cannot be parsed is rejected.

use crate::{CssRule, CssomError, Declaration};
use lightningcss::properties::Property;
use lightningcss::rules::CssRule as ParsedRule;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// Single-rule parser
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleParser;

impl RuleParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse exactly one style rule
    pub fn parse(&self, css: &str) -> Result<CssRule, CssomError> {
        let text = css.trim();
        let syntax = |message: String| CssomError::Syntax {
            rule: text.to_string(),
            message,
        };

        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let stylesheet =
            StyleSheet::parse(text, options).map_err(|e| syntax(e.to_string()))?;

        // Recovery skips a rule with a bad selector, leaving nothing behind
        let style = match stylesheet.rules.0.as_slice() {
            [ParsedRule::Style(style)] => style,
            [] => return Err(syntax("no valid style rule found".to_string())),
            [_] => return Err(syntax("only style rules are supported".to_string())),
            _ => return Err(syntax("expected a single rule".to_string())),
        };

        let mut declarations = Vec::new();
        for property in style.declarations.declarations.iter() {
            declarations.push(self.convert_declaration(property, false));
        }
        for property in style.declarations.important_declarations.iter() {
            declarations.push(self.convert_declaration(property, true));
        }

        // Keep the selector as written rather than the printer's normalized form
        let selector_text = text
            .split_once('{')
            .map(|(selector, _)| selector.trim().to_string())
            .unwrap_or_default();

        Ok(CssRule {
            selector_text,
            css_text: text.to_string(),
            declarations,
        })
    }

    fn convert_declaration(&self, property: &Property, important: bool) -> Declaration {
        let value = property
            .value_to_css_string(PrinterOptions::default())
            .unwrap_or_default();
        Declaration {
            property: property.property_id().name().to_string(),
            value,
            important,
        }
    }
}
