use uuid::Uuid;

use super::*;
use crate::registry::definition;

// =============================================================
// Helpers
// =============================================================

fn doc_with(kind: ComponentKind) -> (Document, Selection, InstanceId) {
    let mut doc = Document::new();
    let id = doc.place(&definition(kind)).id;
    let mut sel = Selection::default();
    sel.select(id);
    (doc, sel, id)
}

fn range_field(min: i64, max: i64, unit: &'static str) -> FieldDescriptor {
    FieldDescriptor { key: "height", label: "Height", input: InputKind::Range { min, max, unit }, group: "Size" }
}

fn find_control<'a>(panel: &'a PropertyPanel, key: &str) -> &'a Control {
    panel
        .groups
        .iter()
        .flat_map(|g| g.fields.iter())
        .find(|f| f.key == key)
        .map(|f| &f.control)
        .unwrap()
}

// =============================================================
// Panel generation
// =============================================================

#[test]
fn no_selection_has_no_panel() {
    let mut doc = Document::new();
    doc.place(&definition(ComponentKind::Text));
    assert!(panel(&doc, &Selection::default()).is_none());
}

#[test]
fn stale_selection_has_no_panel() {
    let (doc, _, _) = doc_with(ComponentKind::Text);
    let mut sel = Selection::default();
    sel.select(Uuid::new_v4());
    assert!(panel(&doc, &sel).is_none());
}

#[test]
fn panel_follows_live_selection_only() {
    let (mut doc, sel, id) = doc_with(ComponentKind::Heading);
    assert_eq!(sel.resolve(&doc), Some(id));
    assert!(panel(&doc, &sel).is_some());
    doc.remove(&id);
    assert_eq!(sel.current(), Some(id));
    assert!(panel(&doc, &sel).is_none());
}

#[test]
fn panel_groups_in_first_seen_order() {
    let (doc, sel, id) = doc_with(ComponentKind::Text);
    let p = panel(&doc, &sel).unwrap();
    assert_eq!(p.instance, id);
    assert_eq!(p.title, "Text Block");
    let names: Vec<&str> = p.groups.iter().map(|g| g.name).collect();
    assert_eq!(names, ["Content", "Style", "Size"]);
    let size: Vec<&str> = p.groups[2].fields.iter().map(|f| f.key).collect();
    assert_eq!(size, ["width", "height", "padding", "margin"]);
}

#[test]
fn image_panel_merges_non_adjacent_style_fields() {
    let (doc, sel, _) = doc_with(ComponentKind::Image);
    let p = panel(&doc, &sel).unwrap();
    let names: Vec<&str> = p.groups.iter().map(|g| g.name).collect();
    assert_eq!(names, ["Content", "Style", "Size"]);
    let style: Vec<&str> = p.groups[1].fields.iter().map(|f| f.key).collect();
    assert_eq!(style, ["borderRadius", "objectFit"]);
}

#[test]
fn controls_follow_input_kind() {
    let (doc, sel, _) = doc_with(ComponentKind::Text);
    let p = panel(&doc, &sel).unwrap();
    assert_eq!(
        find_control(&p, "content"),
        &Control::TextArea { value: "Your text here...".to_owned(), rows: 3 }
    );
    assert_eq!(
        find_control(&p, "color"),
        &Control::Color { swatch: "#333333".to_owned(), raw: "#333333".to_owned() }
    );
    assert_eq!(
        find_control(&p, "height"),
        &Control::Range { value: 40, min: 20, max: 200, unit: "px", readout: "40px".to_owned() }
    );
    assert!(matches!(
        find_control(&p, "fontSize"),
        Control::Select { selected: Some(2), .. }
    ));
}

#[test]
fn url_field_uses_url_control() {
    let (doc, sel, _) = doc_with(ComponentKind::Button);
    let p = panel(&doc, &sel).unwrap();
    assert_eq!(find_control(&p, "href"), &Control::UrlInput { value: "#".to_owned() });
}

#[test]
fn columns_select_shows_integer_options() {
    let (doc, sel, _) = doc_with(ComponentKind::Columns);
    let p = panel(&doc, &sel).unwrap();
    assert_eq!(
        find_control(&p, "columnCount"),
        &Control::Select {
            options: vec!["1".to_owned(), "2".to_owned(), "3".to_owned(), "4".to_owned()],
            selected: Some(1),
        }
    );
}

#[test]
fn color_swatch_normalizes_non_hex_but_raw_is_untouched() {
    let (doc, sel, _) = doc_with(ComponentKind::Columns);
    let p = panel(&doc, &sel).unwrap();
    assert_eq!(
        find_control(&p, "backgroundColor"),
        &Control::Color { swatch: "#000000".to_owned(), raw: "transparent".to_owned() }
    );
}

#[test]
fn range_control_falls_back_to_min_on_corrupt_value() {
    let (mut doc, sel, id) = doc_with(ComponentKind::Text);
    let mut patch = PropMap::new();
    patch.insert("height".to_owned(), PropValue::from("abc"));
    doc.update(&id, &patch);
    let p = panel(&doc, &sel).unwrap();
    assert!(matches!(find_control(&p, "height"), Control::Range { value: 20, .. }));
}

// =============================================================
// Parsing and coercion
// =============================================================

#[test]
fn parse_leading_int_behaves_like_parse_int() {
    assert_eq!(parse_leading_int("16px"), Some(16));
    assert_eq!(parse_leading_int("  42"), Some(42));
    assert_eq!(parse_leading_int("-5%"), Some(-5));
    assert_eq!(parse_leading_int("12.7"), Some(12));
    assert_eq!(parse_leading_int("0px"), Some(0));
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn range_corrupt_input_falls_back_to_min_with_unit() {
    let field = range_field(20, 100, "px");
    assert_eq!(coerce(&field, "abc"), Some(PropValue::from("20px")));
}

#[test]
fn range_reserializes_with_declared_unit() {
    let field = range_field(20, 100, "%");
    assert_eq!(coerce(&field, "75"), Some(PropValue::from("75%")));
    assert_eq!(coerce(&field, "9999px"), Some(PropValue::from("9999%")));
}

#[test]
fn text_kinds_pass_through() {
    for input in [InputKind::Text, InputKind::LongText, InputKind::Url, InputKind::Color] {
        let field = FieldDescriptor { key: "k", label: "K", input, group: "G" };
        assert_eq!(coerce(&field, "  raw value "), Some(PropValue::from("  raw value ")));
    }
}

#[test]
fn select_accepts_listed_option_only() {
    let field = registry::field_for(ComponentKind::Text, "textAlign").unwrap();
    assert_eq!(coerce(&field, "center"), Some(PropValue::from("center")));
    assert_eq!(coerce(&field, "justify"), None);
}

#[test]
fn select_commits_typed_option_value() {
    let field = registry::field_for(ComponentKind::Columns, "columnCount").unwrap();
    assert_eq!(coerce(&field, "3"), Some(PropValue::Int(3)));
    assert_eq!(coerce(&field, "5"), None);
}

// =============================================================
// Commit
// =============================================================

#[test]
fn commit_updates_only_selected_instance() {
    let mut doc = Document::new();
    let other = doc.place(&definition(ComponentKind::Button)).id;
    let target = doc.place(&definition(ComponentKind::Button)).id;
    let mut sel = Selection::default();
    sel.select(target);

    let commit = commit(&mut doc, &sel, "text", "Buy Now").unwrap();
    assert_eq!(commit.id, target);
    assert_eq!(commit.patch.len(), 1);
    assert_eq!(doc.find(&target).unwrap().props["text"], PropValue::from("Buy Now"));
    assert_eq!(doc.find(&other).unwrap().props["text"], PropValue::from("Click Me"));
}

fn color_control(doc: &Document, sel: &Selection, key: &str) -> Control {
    find_control(&panel(doc, sel).unwrap(), key).clone()
}

#[test]
fn color_commit_updates_swatch_and_raw_views() {
    let (mut doc, sel, _) = doc_with(ComponentKind::Button);
    assert_eq!(
        color_control(&doc, &sel, "color"),
        Control::Color { swatch: "#ffffff".to_owned(), raw: "#ffffff".to_owned() }
    );

    // Swatch edits arrive as canonical #rrggbb.
    commit(&mut doc, &sel, "color", "#ff0000").unwrap();
    assert_eq!(
        color_control(&doc, &sel, "color"),
        Control::Color { swatch: "#ff0000".to_owned(), raw: "#ff0000".to_owned() }
    );

    // Raw edits may use the short form; the swatch normalizes, raw is kept.
    commit(&mut doc, &sel, "color", "#abc").unwrap();
    assert_eq!(
        color_control(&doc, &sel, "color"),
        Control::Color { swatch: "#aabbcc".to_owned(), raw: "#abc".to_owned() }
    );
}

#[test]
fn commit_without_selection_is_none() {
    let mut doc = Document::new();
    doc.place(&definition(ComponentKind::Text));
    let before = doc.clone();
    assert!(commit(&mut doc, &Selection::default(), "content", "x").is_none());
    assert_eq!(doc, before);
}

#[test]
fn commit_unknown_key_is_none() {
    let (mut doc, sel, _) = doc_with(ComponentKind::Image);
    let before = doc.clone();
    assert!(commit(&mut doc, &sel, "content", "x").is_none());
    assert_eq!(doc, before);
}

#[test]
fn commit_off_list_select_leaves_document() {
    let (mut doc, sel, _) = doc_with(ComponentKind::Heading);
    let before = doc.clone();
    assert!(commit(&mut doc, &sel, "level", "h7").is_none());
    assert_eq!(doc, before);
}

#[test]
fn commit_range_from_slider() {
    let (mut doc, sel, id) = doc_with(ComponentKind::Container);
    let commit = commit(&mut doc, &sel, "width", "60").unwrap();
    assert_eq!(commit.patch["width"], PropValue::from("60%"));
    assert_eq!(doc.find(&id).unwrap().props["width"], PropValue::from("60%"));
}
