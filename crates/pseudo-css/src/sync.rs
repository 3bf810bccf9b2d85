//! Stylesheet synchronization
//!
//! Renders a [`RuleEntry`] and stores it at the entry's slot. The rule
//! list has no "replace at index", so a write inserts the new rule at the
//! slot and then deletes the stale copy that the insert pushed to
//! `index + 1`. Slots below the target that were never written are
//! filled with an inert placeholder first, since inserting past the end
//! of the list is an index error.

use pseudo_cssom::{CssStyleSheet, RuleParser};
use pseudo_dom::ElementRef;

use crate::case::dash_case;
use crate::{Result, RuleEntry};

/// What a write did to the managed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Rule stored at `index` after appending `placeholders` filler rules
    Written { index: usize, placeholders: usize },
    /// The sheet cannot insert rules; nothing changed
    Unsupported,
}

/// Full selector: resolved fragment followed by the pseudo-element name
pub fn render_selector(element: ElementRef<'_>, pseudo_element: &str, entry: &RuleEntry) -> String {
    let mut selector = entry.selector.resolve(element);
    selector.push_str(pseudo_element);
    selector
}

/// Declaration block contents, truthy properties only
pub fn render_body(entry: &RuleEntry) -> String {
    let mut body = String::new();
    for (property, value) in entry.properties.iter() {
        if !value.is_truthy() {
            continue;
        }
        body.push_str(&dash_case(property));
        body.push(':');
        body.push_str(&value.to_string());
        if entry.use_important {
            body.push_str("!important");
        }
        body.push(';');
    }
    body
}

pub fn render_rule(element: ElementRef<'_>, pseudo_element: &str, entry: &RuleEntry) -> String {
    format!(
        "{}{{{}}}",
        render_selector(element, pseudo_element, entry),
        render_body(entry)
    )
}

/// Write the entry's current rule into `sheet` at the entry's index
pub fn write(
    sheet: &mut CssStyleSheet,
    placeholder: &str,
    element: ElementRef<'_>,
    pseudo_element: &str,
    entry: &RuleEntry,
) -> Result<WriteOutcome> {
    let capabilities = sheet.capabilities();
    if !capabilities.insert_rule {
        tracing::debug!("Stylesheet cannot insert rules, skipping write of {}", pseudo_element);
        return Ok(WriteOutcome::Unsupported);
    }

    let rule = render_rule(element, pseudo_element, entry);
    if let Err(err) = RuleParser::new().parse(&rule) {
        tracing::warn!("Not writing invalid rule {}: {}", rule, err);
        return Err(err.into());
    }

    let index = entry.index();
    let mut placeholders = 0;
    while sheet.len() <= index {
        let end = sheet.len();
        sheet.insert_rule(placeholder, end)?;
        placeholders += 1;
    }
    if placeholders > 0 {
        tracing::debug!("Padded stylesheet with {} placeholder rules", placeholders);
    }

    sheet.insert_rule(&rule, index)?;
    if capabilities.delete_rule && index + 1 < sheet.len() {
        sheet.delete_rule(index + 1)?;
    }

    tracing::debug!("Wrote rule {} at {}", rule, index);
    Ok(WriteOutcome::Written { index, placeholders })
}
