use super::*;
use crate::model::extra::LeafExtra;

fn child<'a>(el: &'a Element, tag: &str) -> Option<&'a Element> {
    el.elements().find(|c| c.name == tag)
}

#[test]
fn absent_fields_are_omitted_and_empty_fields_written_bare() {
    let clip = Clip {
        name: Field::Empty,
        duration: Field::Present(188),
        ..Clip::default()
    };
    let mut el = Element::new("clip");
    Encoder::new(&FileArena::new()).clip(&mut el, &clip);
    let tags: Vec<&str> = el.elements().map(|c| c.name.as_str()).collect();
    assert_eq!(tags, vec!["name", "duration"]);
    assert!(child(&el, "name").unwrap().is_bare());
    assert_eq!(child(&el, "duration").unwrap().text(), "188");
}

#[test]
fn booleans_are_written_upper_case() {
    let item = ClipItem {
        enabled: Field::Present(true),
        still_frame: Field::Present(false),
        ..ClipItem::default()
    };
    let mut el = Element::new("clipitem");
    Encoder::new(&FileArena::new()).clip_item(&mut el, &item);
    assert_eq!(child(&el, "enabled").unwrap().text(), "TRUE");
    assert_eq!(child(&el, "stillframe").unwrap().text(), "FALSE");
}

fn two_items_sharing(file: File) -> Document {
    let mut doc = Document::new(5);
    let handle = doc.files.insert(file);
    let item = ClipItem {
        file: Field::Present(handle),
        ..ClipItem::default()
    };
    let media = Media {
        video: Field::Present(Video {
            tracks: vec![Track {
                clip_items: vec![item.clone(), item],
                ..Track::default()
            }],
            ..Video::default()
        }),
        ..Media::default()
    };
    doc.payload = Some(Payload::Sequence(Sequence {
        media: Field::Present(media),
        ..Sequence::default()
    }));
    doc
}

fn written_files(root: &Element) -> Vec<&Element> {
    let seq = child(root, "sequence").unwrap();
    let video = child(child(seq, "media").unwrap(), "video").unwrap();
    let track = child(video, "track").unwrap();
    track
        .elements()
        .filter_map(|item| child(item, "file"))
        .collect()
}

#[test]
fn shared_file_is_defined_once_then_referenced() {
    let doc = two_items_sharing(File {
        id: Some("f1".to_string()),
        name: Field::Present("a.mov".to_string()),
        rate: Rate::new(25),
        ..File::default()
    });
    let root = Encoder::new(&doc.files).document(&doc);
    let files = written_files(&root);
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].attr("id"), Some("f1"));
    assert_eq!(child(files[0], "rate").unwrap().elements().next().unwrap().text(), "25");
    assert_eq!(files[1].attr("id"), Some("f1"));
    assert!(files[1].children.is_empty());
}

#[test]
fn anonymous_files_are_always_written_in_full() {
    let doc = two_items_sharing(File {
        rate: Rate::new(30),
        ..File::default()
    });
    let root = Encoder::new(&doc.files).document(&doc);
    let files = written_files(&root);
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| !f.children.is_empty()));
}

#[test]
fn foreign_file_handle_is_written_bare() {
    let files = FileArena::new();
    let el = Encoder::new(&files).file_element(FileId(3), true);
    assert!(el.is_bare());
}

#[test]
fn leaf_markup_is_merged_into_its_field() {
    let mut clip = Clip {
        duration: Field::Present(5),
        ..Clip::default()
    };
    clip.extra.leaves.push(LeafExtra {
        tag: "duration".to_string(),
        attributes: vec![("unit".to_string(), "f".to_string())],
        elements: vec![Element::new("vendor:x")],
    });
    clip.extra.text = "stray".to_string();
    let mut el = Element::new("clip");
    Encoder::new(&FileArena::new()).clip(&mut el, &clip);
    let duration = child(&el, "duration").unwrap();
    assert_eq!(duration.attr("unit"), Some("f"));
    assert_eq!(duration.text(), "5");
    assert!(child(duration, "vendor:x").is_some());
    assert_eq!(el.text(), "stray");
}

#[test]
fn extras_follow_known_fields() {
    let mut clip = Clip {
        name: Field::Present("a".to_string()),
        ..Clip::default()
    };
    clip.extra.elements.push(Element::with_text("vendorthing", "1"));
    clip.extra.attributes.push(("vendor".to_string(), "x".to_string()));
    let mut el = Element::new("clip");
    Encoder::new(&FileArena::new()).clip(&mut el, &clip);
    let tags: Vec<&str> = el.elements().map(|c| c.name.as_str()).collect();
    assert_eq!(tags, vec!["name", "vendorthing"]);
    assert_eq!(el.attr("vendor"), Some("x"));
}

#[test]
fn document_root_carries_version_and_payload() {
    let mut doc = Document::new(4);
    doc.payload = Some(Payload::Sequence(Sequence {
        id: Some("s".to_string()),
        ..Sequence::default()
    }));
    let root = Encoder::new(&doc.files).document(&doc);
    assert_eq!(root.name, "xmeml");
    assert_eq!(root.attr("version"), Some("4"));
    let seq = child(&root, "sequence").unwrap();
    assert_eq!(seq.attr("id"), Some("s"));
}

#[test]
fn value_mixes_text_and_components() {
    let param = Parameter {
        value: Field::Present(Value::position(crate::model::value::PositionValue {
            horiz: 3,
            vert: -5,
        })),
        ..Parameter::default()
    };
    let mut el = Element::new("parameter");
    Encoder::new(&FileArena::new()).parameter(&mut el, &param);
    let value = child(&el, "value").unwrap();
    assert_eq!(child(value, "horiz").unwrap().text(), "3");
    assert_eq!(child(value, "vert").unwrap().text(), "-5");
}
