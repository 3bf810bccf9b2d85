//! Comprehensive tests for pseudo-css
//!
//! End-to-end behavior of the registry against a document and its
//! managed stylesheet.

use pseudo_css::{
    PropertyMap, PropertyValue, PseudoElementOptions, RegistryConfig, RegistryContext,
    SelectorSource,
};
use pseudo_dom::{Document, NodeId};

fn setup() -> (Document, RegistryContext) {
    let mut doc = Document::default();
    let registry = RegistryContext::attach(&mut doc, RegistryConfig::default()).unwrap();
    (doc, registry)
}

fn div(doc: &mut Document) -> NodeId {
    doc.append_element(doc.body(), "div").unwrap()
}

// ============================================================================
// ATTACHMENT
// ============================================================================

#[test]
fn test_attach_appends_style_to_head() {
    let (doc, registry) = setup();
    let style = registry.style_element();

    assert_eq!(doc.element(style).unwrap().tag_name(), "style");
    assert_eq!(doc.element(style).unwrap().parent(), Some(doc.head()));
    assert_eq!(registry.stylesheet().owner_node(), style);
    assert!(registry.stylesheet().is_empty());
}

// ============================================================================
// IDENTITY
// ============================================================================

#[test]
fn test_identity_idempotent() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    let first = registry.ensure_identity(&mut doc, el).unwrap();
    let second = registry.ensure_identity(&mut doc, el).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("pseudoCssId"));
}

#[test]
fn test_styling_assigns_id() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "red")
        .unwrap();

    let id = doc.element(el).unwrap().id().to_string();
    assert!(!id.is_empty());
    assert_eq!(doc.get_element_by_id(&id), Some(el));
}

// ============================================================================
// INDEX ALLOCATION
// ============================================================================

#[test]
fn test_index_stable_across_mutations() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    let index = registry.pseudo_element_options(&mut doc, el, "::before").unwrap().index;
    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "red")
        .unwrap();
    registry
        .configure_pseudo_element(
            &mut doc,
            [el],
            [("::before", PseudoElementOptions::new().use_important(false))],
        )
        .unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "blue")
        .unwrap();

    assert_eq!(
        registry.pseudo_element_options(&mut doc, el, "::before").unwrap().index,
        index
    );
}

#[test]
fn test_allocation_monotonic_across_elements() {
    let (mut doc, mut registry) = setup();
    let a = div(&mut doc);
    let b = div(&mut doc);

    let order = [(a, "::before"), (b, "::after"), (a, "::after"), (b, "::before")];
    let indices: Vec<usize> = order
        .iter()
        .map(|&(el, name)| registry.pseudo_element_options(&mut doc, el, name).unwrap().index)
        .collect();

    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(registry.allocated_indices(), 4);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_render_fidelity() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .set_pseudo_element_css(
            &mut doc,
            [el],
            "::before",
            PropertyMap::new().with("color", "red").with("background", false),
        )
        .unwrap();

    let rule = registry.rule_text(&doc, el, "::before").unwrap();
    assert!(rule.contains("color:red!important"));
    assert!(!rule.contains("background"));
}

#[test]
fn test_merge_semantics() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .set_pseudo_element_css(&mut doc, [el], "::before", PropertyMap::from([("color", "red")]))
        .unwrap();
    registry
        .set_pseudo_element_css(&mut doc, [el], "::before", PropertyMap::from([("fontSize", "2px")]))
        .unwrap();

    assert_eq!(registry.stylesheet().len(), 1);
    let rule = registry.rule_text(&doc, el, "::before").unwrap();
    assert!(rule.contains("color:red!important;"));
    assert!(rule.contains("font-size:2px!important;"));
}

#[test]
fn test_dash_case_keys_normalized() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .set_pseudo_element_property(&mut doc, [el], "::after", "font-size", "3px")
        .unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [el], "::after", "fontSize", "4px")
        .unwrap();

    assert_eq!(
        registry.pseudo_element_css(&doc, el, "::after", "font-size"),
        Some(&PropertyValue::from("4px"))
    );
    let rule = registry.rule_text(&doc, el, "::after").unwrap();
    assert!(rule.contains("font-size:4px!important;"));
    assert!(!rule.contains("3px"));
}

#[test]
fn test_suppressed_property_stays_tracked() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "red")
        .unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "")
        .unwrap();

    assert_eq!(
        registry.pseudo_element_css(&doc, el, "::before", "color"),
        Some(&PropertyValue::from(""))
    );
    let id = doc.element(el).unwrap().id().to_string();
    assert_eq!(
        registry.rule_text(&doc, el, "::before"),
        Some(format!("#{id}::before{{}}").as_str())
    );
}

#[test]
fn test_numeric_values_stringified() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .set_pseudo_element_css(
            &mut doc,
            [el],
            "::before",
            PropertyMap::new().with("zIndex", 3).with("opacity", 0.5),
        )
        .unwrap();

    let rule = registry.rule_text(&doc, el, "::before").unwrap();
    assert!(rule.contains("z-index:3!important;"));
    assert!(rule.contains("opacity:0.5!important;"));
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_configure_does_not_write() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .configure_pseudo_element(
            &mut doc,
            [el],
            [("::before", PseudoElementOptions::new().selector(".badge"))],
        )
        .unwrap();

    assert!(registry.stylesheet().is_empty());
    assert_eq!(registry.allocated_indices(), 1);
}

#[test]
fn test_literal_selector_and_no_important() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .configure_pseudo_element(
            &mut doc,
            [el],
            [(
                "::after",
                PseudoElementOptions::new().selector(".card").use_important(false),
            )],
        )
        .unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [el], "::after", "content", "'!'")
        .unwrap();

    assert_eq!(
        registry.rule_text(&doc, el, "::after"),
        Some(".card::after{content:'!';}")
    );
}

#[test]
fn test_computed_selector_receives_element() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);
    doc.set_attribute(el, "data-kind", "warning").unwrap();

    let selector = SelectorSource::computed(|element| {
        format!("[data-kind=\"{}\"]", element.attr("data-kind").unwrap_or(""))
    });
    registry
        .configure_pseudo_element(
            &mut doc,
            [el],
            [("::before", PseudoElementOptions::new().selector(selector))],
        )
        .unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "orange")
        .unwrap();

    assert_eq!(
        registry.rule_text(&doc, el, "::before"),
        Some("[data-kind=\"warning\"]::before{color:orange!important;}")
    );
}

#[test]
fn test_read_options_creates_entry() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);
    doc.set_attribute(el, "id", "hero").unwrap();

    let options = registry.pseudo_element_options(&mut doc, el, "::first-line").unwrap();
    assert_eq!(options.index, 0);
    assert!(options.use_important);
    assert_eq!(options.selector.resolve(doc.element(el).unwrap()), "#hero");
}

#[test]
fn test_configure_properties_patch_rendered_on_next_write() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    registry
        .configure_pseudo_element(
            &mut doc,
            [el],
            [(
                "::before",
                PseudoElementOptions::new().properties(PropertyMap::from([("border-color", "blue")])),
            )],
        )
        .unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [el], "::before", "color", "red")
        .unwrap();

    let rule = registry.rule_text(&doc, el, "::before").unwrap();
    assert!(rule.contains("border-color:blue!important;color:red!important;"));
}

// ============================================================================
// STYLESHEET SHAPE
// ============================================================================

#[test]
fn test_densification_placeholder() {
    let (mut doc, mut registry) = setup();
    let a = div(&mut doc);
    let b = div(&mut doc);

    registry.pseudo_element_options(&mut doc, a, "::before").unwrap();
    registry
        .set_pseudo_element_property(&mut doc, [b], "::before", "color", "red")
        .unwrap();

    let sheet = registry.stylesheet();
    assert!(sheet.len() >= 2);
    let placeholder = sheet.rule(0).unwrap();
    assert_eq!(placeholder.selector_text, "#null");
    assert!(placeholder.is_empty());
    assert!(doc.get_element_by_id("null").is_none());
}

#[test]
fn test_replace_without_growth() {
    let (mut doc, mut registry) = setup();
    let el = div(&mut doc);

    for size in 1..=10 {
        registry
            .set_pseudo_element_property(&mut doc, [el], "::before", "width", format!("{size}px"))
            .unwrap();
        assert_eq!(registry.stylesheet().len(), 1);
    }
    assert!(registry.rule_text(&doc, el, "::before").unwrap().contains("width:10px"));
}

#[test]
fn test_other_rules_keep_their_positions() {
    let (mut doc, mut registry) = setup();
    let a = div(&mut doc);
    let b = div(&mut doc);
    let c = div(&mut doc);

    for el in [a, b, c] {
        registry
            .set_pseudo_element_property(&mut doc, [el], "::after", "color", "red")
            .unwrap();
    }
    registry
        .set_pseudo_element_property(&mut doc, [b], "::after", "color", "green")
        .unwrap();

    let sheet = registry.stylesheet();
    assert_eq!(sheet.len(), 3);
    for (i, el) in [a, b, c].into_iter().enumerate() {
        let id = doc.element(el).unwrap().id();
        assert_eq!(sheet.rule(i).unwrap().selector_text, format!("#{id}::after"));
    }
    assert!(sheet.rule(1).unwrap().css_text.contains("color:green"));
    assert!(sheet.rule(0).unwrap().css_text.contains("color:red"));
}

#[test]
fn test_fan_out_over_elements() {
    let (mut doc, mut registry) = setup();
    let items: Vec<NodeId> = (0..3).map(|_| div(&mut doc)).collect();

    registry
        .set_pseudo_element_property(&mut doc, items.iter().copied(), "::before", "content", "'-'")
        .unwrap();

    assert_eq!(registry.stylesheet().len(), 3);
    for el in items {
        assert!(registry.rule_text(&doc, el, "::before").is_some());
    }
}
