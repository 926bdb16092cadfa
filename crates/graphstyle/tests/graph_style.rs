//! Integration tests for rule resolution, automatic defaults and
//! stylesheet import/export.

use graphstyle::{
    GraphNode, GraphRelationship, GraphStyle, PaletteEntry, Properties, Selector, StyleDefaults,
    Stylesheet,
};
use proptest::prelude::*;

const CLUSTER_SHEET: &str = include_str!("fixtures/cluster.grass");

fn props(pairs: &[(&str, &str)]) -> Properties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A resolver whose base sheet has exactly one colored rule, so the first
/// automatically assigned color is the first palette entry.
fn single_color_style() -> GraphStyle {
    let defaults = StyleDefaults::builtin()
        .with_stylesheet(Stylesheet::parse("node { diameter: 50px; color: #A5ABB6; }"));
    GraphStyle::with_defaults(defaults).unwrap()
}

#[test]
fn test_tag_rule_applies_to_every_node() {
    let mut style = GraphStyle::new();
    let plain = style.for_node(&GraphNode::new("1"));
    assert_eq!(plain.get("diameter"), "50px");
    assert_eq!(plain.get("border-width"), "2px");

    let labelled = style.for_node(&GraphNode::new("2").with_label("Person"));
    assert_eq!(labelled.get("diameter"), "50px");
}

#[test]
fn test_unlabelled_node_adds_no_rules() {
    let mut style = GraphStyle::new();
    style.for_node(&GraphNode::new("1").with_property("name", "x"));
    assert_eq!(style.rules().len(), 2);
}

#[test]
fn test_later_rule_overrides_earlier() {
    let mut style = GraphStyle::new();
    style
        .import_stylesheet("node.A { color: red; } node.B { color: blue; }")
        .unwrap();
    let resolved = style.for_node(&GraphNode::new("1").with_label("A").with_label("B"));
    assert_eq!(resolved.get("color"), "blue");

    style
        .import_stylesheet("node.B { color: blue; } node.A { color: red; }")
        .unwrap();
    let resolved = style.for_node(&GraphNode::new("1").with_label("A").with_label("B"));
    assert_eq!(resolved.get("color"), "red");
}

#[test]
fn test_relationship_resolution_has_no_side_effects() {
    let style = GraphStyle::new();
    let resolved = style.for_relationship(&GraphRelationship::new("r", "KNOWS"));
    assert_eq!(resolved.get("shaft-width"), "1px");
    assert_eq!(resolved.get("caption"), "<type>");
    assert_eq!(style.rules().len(), 2);
}

#[test]
fn test_default_colors_follow_palette_order() {
    let mut style = single_color_style();
    let palette = style.default_colors().to_vec();
    assert_eq!(palette.len(), 12);

    for (i, expected) in palette.iter().enumerate() {
        let node = GraphNode::new(i.to_string()).with_label(format!("L{:02}", i));
        let resolved = style.for_node(&node);
        assert_eq!(resolved.get("color"), expected.color, "label {}", i);
        assert_eq!(resolved.get("border-color"), expected.border_color);
        assert_eq!(resolved.get("text-color-internal"), expected.text_color_internal);
    }

    // Palette exhausted: assignment wraps to the first entry.
    let resolved = style.for_node(&GraphNode::new("x").with_label("L12"));
    assert_eq!(resolved.get("color"), palette[0].color);
}

#[test]
fn test_default_color_is_assigned_once() {
    let mut style = single_color_style();
    let node = GraphNode::new("1").with_label("Person");
    let first = style.for_node(&node);
    let rules = style.rules().len();
    let second = style.for_node(&node);
    assert_eq!(first.get("color"), second.get("color"));
    assert_eq!(style.rules().len(), rules);
}

#[test]
fn test_default_color_attaches_to_first_sorted_label() {
    let mut style = single_color_style();
    style.for_node(&GraphNode::new("1").with_label("Person").with_label("Actor"));
    let rule = style.find_rule(&Selector::node(["Actor"])).unwrap();
    assert_eq!(rule.get("color"), Some("#604A0E"));
    assert!(style.find_rule(&Selector::node(["Person"])).is_none());

    // Any node carrying the label now shares the color.
    let resolved = style.for_node(&GraphNode::new("2").with_label("Actor"));
    assert_eq!(resolved.get("color"), "#604A0E");
}

#[test]
fn test_custom_palette_is_used() {
    let defaults = StyleDefaults::builtin()
        .with_stylesheet(Stylesheet::parse("node { color: gray; }"))
        .with_palette(vec![PaletteEntry::new("#123456", "#654321", "#000000")]);
    let mut style = GraphStyle::with_defaults(defaults).unwrap();
    let resolved = style.for_node(&GraphNode::new("1").with_label("Thing"));
    assert_eq!(resolved.get("color"), "#123456");
}

#[test]
fn test_default_caption_inference() {
    let mut style = GraphStyle::new();

    let alice = GraphNode::new("1")
        .with_label("Person")
        .with_property("name", "Alice")
        .with_property("id", "x");
    let resolved = style.for_node(&alice);
    assert_eq!(resolved.get("defaultCaption"), "{name}");
    assert_eq!(resolved.get("caption"), "{name}");
    assert_eq!(style.interpolate(resolved.get("caption"), &alice), "Alice");

    let doc = GraphNode::new("2")
        .with_label("Doc")
        .with_property("description", "x");
    assert_eq!(style.for_node(&doc).get("defaultCaption"), "{description}");

    let bare = GraphNode::new("3").with_label("Bare");
    let resolved = style.for_node(&bare);
    assert_eq!(resolved.get("defaultCaption"), "<id>");
    assert_eq!(style.interpolate(resolved.get("caption"), &bare), "3");
}

#[test]
fn test_explicit_caption_suppresses_default_caption() {
    let mut style = GraphStyle::new();
    style
        .change_for_selector(&Selector::node(["Person"]), &props(&[("caption", "{title}")]));
    let node = GraphNode::new("1")
        .with_label("Person")
        .with_property("name", "Alice");
    let resolved = style.for_node(&node);
    assert_eq!(resolved.get("caption"), "{title}");
    assert_eq!(resolved.get("defaultCaption"), "");
}

#[test]
fn test_empty_label_adds_no_catch_all_rule() {
    let mut style = GraphStyle::new();
    style.for_node(&GraphNode::new("1").with_label(""));
    let selectors: Vec<_> = style.rules().iter().map(|r| r.selector().to_string()).collect();
    assert_eq!(selectors, vec!["node", "relationship"]);

    let mut copy = GraphStyle::new();
    copy.load_rules(Some(&style.to_sheet())).unwrap();
    assert_eq!(copy.to_sheet(), style.to_sheet());
}

#[test]
fn test_load_rules_round_trip() {
    let mut sheet = Stylesheet::new();
    sheet.insert("node", props(&[("diameter", "50px")]));
    sheet.insert("node.Person", props(&[("color", "#C990C0"), ("caption", "{name}")]));
    sheet.insert("node.Person.Actor", props(&[("diameter", "65px")]));
    sheet.insert("relationship.ACTED_IN", props(&[("shaft-width", "3px")]));

    let mut style = GraphStyle::new();
    style.load_rules(Some(&sheet)).unwrap();
    let exported = style.to_sheet();
    assert_eq!(exported, sheet);

    style.load_rules(Some(&exported)).unwrap();
    assert_eq!(style.to_sheet(), sheet);
}

#[test]
fn test_text_export_reimports() {
    let mut style = GraphStyle::new();
    style.for_node(
        &GraphNode::new("1")
            .with_label("Person")
            .with_property("name", "Alice"),
    );
    style.change_for_selector(
        &Selector::relationship(Some("KNOWS")),
        &props(&[("caption", "{since}"), ("shaft-width", "5px")]),
    );

    let mut copy = GraphStyle::new();
    copy.import_stylesheet(&style.to_text()).unwrap();
    assert_eq!(copy.to_sheet(), style.to_sheet());
}

#[test]
fn test_import_quoted_caption_with_colon() {
    let mut style = GraphStyle::new();
    style
        .import_stylesheet("node.Foo { color: red; caption: 'it: works' }")
        .unwrap();
    assert_eq!(style.rules().len(), 1);
    let rule = &style.rules()[0];
    assert_eq!(rule.selector().to_string(), "node.Foo");
    assert_eq!(rule.properties(), &props(&[("color", "red"), ("caption", "it")]));
}

#[test]
fn test_failed_import_keeps_rules() {
    let mut style = GraphStyle::new();
    let before = style.to_sheet();
    assert!(style.import_stylesheet("edge.KNOWS { color: red; }").is_err());
    assert!(style.import_stylesheet_strict("{ color: red; }").is_err());
    assert_eq!(style.to_sheet(), before);
}

#[test]
fn test_import_skips_stray_closing_brace() {
    let mut style = GraphStyle::new();
    style.import_stylesheet("node.A { color: red; } }").unwrap();
    assert_eq!(style.rules().len(), 1);
    assert_eq!(style.rules()[0].selector().to_string(), "node.A");
    assert!(style.import_stylesheet_strict("node.A { color: red; } }").is_err());
}

#[test]
fn test_default_caption_is_inferred_once_per_label() {
    let mut style = GraphStyle::new();
    let alice = GraphNode::new("1")
        .with_label("Person")
        .with_property("name", "Alice");
    let dr = GraphNode::new("2")
        .with_label("Person")
        .with_property("title", "Dr");

    style.for_node(&alice);
    let person = Selector::node(["Person"]);
    let first = style.find_rule(&person).unwrap().properties().clone();

    let resolved = style.for_node(&dr);
    assert_eq!(resolved.get("defaultCaption"), "{name}");
    assert_eq!(style.find_rule(&person).unwrap().properties(), &first);
    assert_eq!(style.interpolate(resolved.get("caption"), &dr), "");
}

#[test]
fn test_reset_restores_defaults() {
    let fresh = GraphStyle::new();
    let mut style = GraphStyle::new();
    style.import_stylesheet(CLUSTER_SHEET).unwrap();
    style.for_node(&GraphNode::new("1").with_label("Person"));
    style.change_for_selector(&Selector::node(Vec::<String>::new()), &props(&[("color", "black")]));
    let first = style.rules()[0].id();
    style.remove_rule(first);

    assert!(style.reset_to_default());
    assert_eq!(style.to_sheet(), fresh.to_sheet());
    assert_eq!(
        style.calculate_style(&Selector::node(["Person"])),
        fresh.calculate_style(&Selector::node(["Person"]))
    );
    assert_eq!(
        style.for_relationship(&GraphRelationship::new("r", "T")),
        fresh.for_relationship(&GraphRelationship::new("r", "T"))
    );
}

#[test]
fn test_cluster_sheet_resolution() {
    let mut style = GraphStyle::new();
    style.import_stylesheet(CLUSTER_SHEET).unwrap();
    assert_eq!(style.rules().len(), 10);
    assert_eq!(style.rules()[0].selector().to_string(), "node.*");

    let node = GraphNode::new("n1")
        .with_label("Component")
        .with_label("NORMAL")
        .with_property("name", "api");
    let resolved = style.for_node(&node);
    assert_eq!(resolved.get("diameter"), "75px");
    assert_eq!(resolved.get("color"), "#22A522");
    assert_eq!(resolved.get("caption"), "{name}");
    assert_eq!(style.rules().len(), 10);
    assert_eq!(
        style.find_rule(&Selector::node(["Component"])).unwrap().get("defaultCaption"),
        Some("{name}")
    );

    let rel = GraphRelationship::new("r1", "CALLS");
    let resolved = style.for_relationship(&rel);
    assert_eq!(resolved.get("color"), "#A5ABB6");
    assert_eq!(style.interpolate(resolved.get("caption"), &rel), "calls");
}

#[test]
fn test_default_tables_are_exposed() {
    let style = GraphStyle::new();
    assert_eq!(style.default_sizes().len(), 5);
    assert_eq!(style.default_icon_codes().len(), 7);
    assert_eq!(style.default_array_widths()[7]["shaft-width"], "38px");
    assert_eq!(style.default_colors()[11].color, "#569480");
}

fn selector_key() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("node"), Just("relationship")],
        prop::collection::vec("[A-Za-z_][A-Za-z0-9_]{0,7}", 0..3),
    )
        .prop_map(|(tag, classes)| {
            std::iter::once(tag.to_string())
                .chain(classes)
                .collect::<Vec<_>>()
                .join(".")
        })
}

fn properties() -> impl Strategy<Value = Properties> {
    prop::collection::vec(("[a-z][a-z-]{0,9}", "[a-z0-9#]{1,8}"), 0..4)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_load_rules_to_sheet_round_trip(
        entries in prop::collection::vec((selector_key(), properties()), 0..6)
    ) {
        let sheet: Stylesheet = entries.into_iter().collect();
        let mut style = GraphStyle::new();
        style.load_rules(Some(&sheet)).unwrap();
        let exported = style.to_sheet();
        prop_assert_eq!(&exported, &sheet);

        style.load_rules(Some(&exported)).unwrap();
        prop_assert_eq!(style.to_sheet(), exported);
    }
}
