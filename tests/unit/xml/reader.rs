use super::*;

#[test]
fn parses_nested_elements_attributes_and_text() {
    let src = br#"<?xml version="1.0" encoding="UTF-8"?>
        <!DOCTYPE xmeml>
        <xmeml version="5">
            <!-- comment -->
            <clip id="c&amp;1"><name>A &lt;b&gt;</name><in/></clip>
        </xmeml>"#;
    let root = parse(src, 16).unwrap();
    assert_eq!(root.name, "xmeml");
    assert_eq!(root.attr("version"), Some("5"));

    let clip = root.elements().next().unwrap();
    assert_eq!(clip.attr("id"), Some("c&1"));
    let mut kids = clip.elements();
    assert_eq!(kids.next().unwrap().text(), "A <b>");
    assert!(kids.next().unwrap().is_bare());
}

#[test]
fn whitespace_between_elements_is_dropped() {
    let root = parse(b"<a>\n  <b>1</b>\n  <c> x </c>\n</a>", 16).unwrap();
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.elements().nth(1).unwrap().text(), " x ");
}

#[test]
fn cdata_becomes_text() {
    let root = parse(b"<a><![CDATA[<raw>]]></a>", 16).unwrap();
    assert_eq!(root.text(), "<raw>");
}

#[test]
fn rejects_unclosed_and_mismatched_markup() {
    assert!(matches!(
        parse(b"<a><b></a>", 16),
        Err(XmemlError::MalformedXml { .. })
    ));
    assert!(matches!(
        parse(b"<a><b>", 16),
        Err(XmemlError::MalformedXml { .. })
    ));
    assert!(matches!(
        parse(b"", 16),
        Err(XmemlError::MalformedXml { .. })
    ));
    assert!(matches!(
        parse(b"<a/><b/>", 16),
        Err(XmemlError::MalformedXml { .. })
    ));
}

#[test]
fn element_depth_is_bounded() {
    let mut src = String::new();
    for _ in 0..5 {
        src.push_str("<n>");
    }
    for _ in 0..5 {
        src.push_str("</n>");
    }
    assert!(parse(src.as_bytes(), 5).is_ok());
    match parse(src.as_bytes(), 4) {
        Err(XmemlError::ExcessiveNesting { depth, limit, path }) => {
            assert_eq!(depth, 5);
            assert_eq!(limit, 4);
            assert_eq!(path.to_string(), "n.n.n.n.n");
        }
        other => panic!("expected nesting error, got {other:?}"),
    }
}
