use super::*;

#[test]
fn text_concatenates_direct_text_only() {
    let mut el = Element::new("value");
    el.push_text("10");
    el.push(Element::with_text("red", "3"));
    el.push_text("0");
    assert_eq!(el.text(), "100");
    assert_eq!(el.elements().count(), 1);
}

#[test]
fn empty_text_adds_no_node() {
    let el = Element::with_text("name", "");
    assert!(el.is_bare());
    assert!(!el.has_text());
}

#[test]
fn attr_lookup_returns_first_match() {
    let mut el = Element::new("file");
    el.set_attr("id", "a");
    el.set_attr("id", "b");
    assert_eq!(el.attr("id"), Some("a"));
    assert_eq!(el.attr("missing"), None);
    assert!(!el.is_bare());
}
