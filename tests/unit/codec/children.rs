use super::*;

fn parent(tags: &[&str]) -> Element {
    let mut el = Element::new("clipitem");
    for tag in tags {
        el.push(Element::with_text(*tag, "x"));
    }
    el
}

#[test]
fn take_claims_once() {
    let el = parent(&["name", "duration"]);
    let mut c = Children::new(Entity::ClipItem, &el, FieldPath::root("clipitem"));
    let m = c.take("name").unwrap();
    assert_eq!(m.el.name, "name");
    assert_eq!(m.path.to_string(), "clipitem.name");
    assert!(c.take("name").is_none());
    let rest = c.rest();
    assert_eq!(rest.elements.len(), 1);
    assert_eq!(rest.elements[0].name, "duration");
}

#[test]
fn canonical_spelling_wins_over_legacy() {
    let el = parent(&["sublipinfo", "subclipinfo"]);
    let mut c = Children::new(Entity::ClipItem, &el, FieldPath::root("clipitem"));
    assert_eq!(c.take("subclipinfo").unwrap().el.name, "subclipinfo");
    assert_eq!(c.rest().elements[0].name, "sublipinfo");
}

#[test]
fn legacy_spelling_is_accepted() {
    let el = parent(&["sublipinfo"]);
    let mut c = Children::new(Entity::ClipItem, &el, FieldPath::root("clipitem"));
    let m = c.take("subclipinfo").unwrap();
    assert_eq!(m.path.to_string(), "clipitem.sublipinfo");
}

#[test]
fn take_all_indexes_in_document_order() {
    let el = parent(&["marker", "name", "marker", "marker"]);
    let mut c = Children::new(Entity::ClipItem, &el, FieldPath::root("clipitem"));
    let paths: Vec<String> = c
        .take_all("marker")
        .iter()
        .map(|m| m.path.to_string())
        .collect();
    assert_eq!(
        paths,
        vec!["clipitem.marker[0]", "clipitem.marker[1]", "clipitem.marker[2]"]
    );
    assert!(c.take_all("marker").is_empty());
    assert_eq!(c.rest().elements.len(), 1);
}

#[test]
fn stray_text_is_left_over_unless_claimed() {
    let mut el = parent(&["name"]);
    el.push_text("stray");
    let c = Children::new(Entity::ClipItem, &el, FieldPath::root("clipitem"));
    assert_eq!(c.rest().text, vec!["stray"]);

    let mut c = Children::new(Entity::Value, &el, FieldPath::root("value"));
    assert_eq!(c.take_text(), "stray");
    assert!(c.rest().text.is_empty());
}

#[test]
fn leaves_with_markup_are_remembered_by_canonical_tag() {
    let mut el = Element::new("sequence");
    let mut ratio = Element::with_text("pixelAspectRatio", "square");
    ratio.set_attr("unit", "x");
    el.push(ratio);
    el.push(Element::with_text("name", "plain"));
    let mut c = Children::new(Entity::Sequence, &el, FieldPath::root("sequence"));
    assert!(c.take_leaf("pixelaspectratio").is_some());
    assert!(c.take_leaf("name").is_some());
    let rest = c.rest();
    assert!(rest.elements.is_empty());
    assert_eq!(rest.leaves.len(), 1);
    assert_eq!(rest.leaves[0].0, "pixelaspectratio");
    assert_eq!(rest.leaves[0].1.attr("unit"), Some("x"));
}
