//! Example: Basic usage of the pseudo-element registry
//!
//! Run with `RUST_LOG=pseudo_css=debug` to see every rule write.

use pseudo_css::{PropertyMap, PseudoElementOptions, RegistryConfig, RegistryContext};
use pseudo_dom::Document;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new("https://example.com/inbox");
    let list = doc.append_element(doc.body(), "ul")?;
    let items = [
        doc.append_element(list, "li")?,
        doc.append_element(list, "li")?,
        doc.append_element(list, "li")?,
    ];

    let mut registry = RegistryContext::attach(&mut doc, RegistryConfig::default())?;

    // Bullet for every item
    registry.set_pseudo_element_css(
        &mut doc,
        items,
        "::before",
        PropertyMap::new().with("content", "'\u{2022} '").with("color", "gray"),
    )?;

    // Unread marker on the second item, without !important
    registry.configure_pseudo_element(
        &mut doc,
        [items[1]],
        [("::after", PseudoElementOptions::new().use_important(false))],
    )?;
    registry.set_pseudo_element_property(&mut doc, [items[1]], "::after", "content", "' (new)'")?;
    registry.set_pseudo_element_property(&mut doc, [items[1]], "::before", "color", "crimson")?;

    println!("{}", registry.stylesheet().to_css());
    Ok(())
}
